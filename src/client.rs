use crate::config::Config;
use crate::form::FormValues;
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Body of both success and error responses from the register endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status.
    #[error("registration rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("registration request failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// The text the form shows for this failure, if the server provided one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Rejected { message, .. } => message.as_deref(),
            SubmissionError::Transport(_) => None,
        }
    }
}

/// Async boundary to the remote registration endpoint.
pub trait RegistrationService: Send + Sync {
    /// Submit a record; `Ok` carries the server's success message.
    fn register<'a>(&'a self, values: &'a FormValues)
        -> BoxFuture<'a, Result<String, SubmissionError>>;
}

/// HTTP client for `POST /api/register`.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.register_endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, values: &FormValues) -> Result<String, SubmissionError> {
        debug!("POST {} for username '{}'", self.endpoint, values.username);

        let response = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .await
            .map_err(|e| {
                warn!("Registration request failed: {}", e);
                SubmissionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let payload: ApiMessage = serde_json::from_str(&body).unwrap_or_default();

        if !status.is_success() {
            warn!("Registration rejected ({}): {}", status, body);
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message: payload.message,
            });
        }

        Ok(payload.message.unwrap_or_default())
    }
}

impl RegistrationService for RegistrationClient {
    fn register<'a>(
        &'a self,
        values: &'a FormValues,
    ) -> BoxFuture<'a, Result<String, SubmissionError>> {
        self.post(values).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn sample_values() -> FormValues {
        FormValues {
            username: "alice".to_string(),
            fav_language: "javascript".to_string(),
            fav_food: "spaghetti".to_string(),
            agreement: true,
        }
    }

    fn client_for(server: &MockServer) -> RegistrationClient {
        RegistrationClient::new(
            format!("{}/api/register", server.uri()),
            Duration::from_secs(5),
        )
        .expect("client should build")
    }

    #[tokio::test]
    async fn test_register_success_returns_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "favLanguage": "javascript",
                "favFood": "spaghetti",
                "agreement": true
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "message": "Success! Welcome, alice!" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let message = client_for(&mock_server)
            .register(&sample_values())
            .await
            .expect("should succeed");
        assert_eq!(message, "Success! Welcome, alice!");
    }

    #[tokio::test]
    async fn test_register_rejection_carries_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({ "message": "username is taken" })),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .register(&sample_values())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Rejected {
                status: 422,
                message: Some("username is taken".to_string())
            }
        );
        assert_eq!(err.user_message(), Some("username is taken"));
    }

    #[tokio::test]
    async fn test_register_rejection_without_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .register(&sample_values())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { status: 500, message: None }));
        assert_eq!(err.user_message(), None);
    }

    #[tokio::test]
    async fn test_register_transport_error_has_no_user_message() {
        // Nothing listens on port 9 (discard) in the test environment.
        let client = RegistrationClient::new("http://127.0.0.1:9/api/register", Duration::from_secs(2))
            .unwrap();

        let err = client.register(&sample_values()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
        assert_eq!(err.user_message(), None);
    }

    #[test]
    fn test_api_message_omits_missing_message() {
        let json = serde_json::to_string(&ApiMessage::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_submission_error_display() {
        let err = SubmissionError::Rejected {
            status: 422,
            message: None,
        };
        assert_eq!(err.to_string(), "registration rejected (422): no message");
    }
}
