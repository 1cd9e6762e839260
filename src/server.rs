//! Mock registration endpoint, for running the form locally and in tests.

use crate::client::ApiMessage;
use crate::form::FormValues;
use crate::schema::UserSchema;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const REGISTER_PATH: &str = "/api/register";

#[derive(Clone, Default)]
struct AppState {
    schema: Arc<UserSchema>,
}

/// Router with `POST /api/register`.
pub fn router() -> Router {
    Router::new()
        .route(REGISTER_PATH, post(register))
        .with_state(AppState::default())
        .layer(TraceLayer::new_for_http())
}

/// Serve the router on an already bound listener.
pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> Response {
    let Json(values) = match payload {
        Ok(values) => values,
        Err(rejection) => {
            return (rejection.status(), Json(ApiMessage::new(rejection.body_text())))
                .into_response();
        }
    };

    match state.schema.validate_record(&values) {
        Ok(()) => {
            let username = values.username.trim();
            info!("Registered '{}'", username);
            (
                StatusCode::CREATED,
                Json(ApiMessage::new(format!("Success! Welcome, {}!", username))),
            )
                .into_response()
        }
        Err(violations) => {
            let message = violations
                .first()
                .map(|v| v.first_message().to_string())
                .unwrap_or_default();
            info!("Rejected registration: {}", message);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiMessage::new(message))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener));
        format!("http://{}{}", addr, REGISTER_PATH)
    }

    #[tokio::test]
    async fn test_register_accepts_valid_record() {
        let url = spawn_server().await;
        let response = reqwest::Client::new()
            .post(&url)
            .json(&serde_json::json!({
                "username": " alice ",
                "favLanguage": "rust",
                "favFood": "broccoli",
                "agreement": true
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
        let body: ApiMessage = response.json().await.unwrap();
        assert_eq!(body.message.as_deref(), Some("Success! Welcome, alice!"));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_record_with_first_error() {
        let url = spawn_server().await;
        let response = reqwest::Client::new()
            .post(&url)
            .json(&serde_json::json!({
                "username": "alice",
                "favLanguage": "rust",
                "favFood": "",
                "agreement": true
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 422);
        let body: ApiMessage = response.json().await.unwrap();
        assert_eq!(body.message.as_deref(), Some("favFood is required"));
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_json() {
        let url = spawn_server().await;
        let response = reqwest::Client::new()
            .post(&url)
            .header("Content-Type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        let body: ApiMessage = response.json().await.unwrap();
        assert!(body.message.is_some());
    }
}
