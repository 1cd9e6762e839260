use crate::i18n::Language;
use anyhow::{Context, Result};

pub const DEFAULT_REGISTER_ENDPOINT: &str = "http://localhost:9009/api/register";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Form
    pub language: Language,

    // Registration endpoint
    pub register_endpoint: String,
    pub request_timeout_secs: u64,

    // Mock server
    pub mock_server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let language = match std::env::var("FORM_LANGUAGE") {
            Ok(code) if !code.trim().is_empty() => {
                Language::from_code(&code).context("FORM_LANGUAGE is not a supported language")?
            }
            _ => Language::default_language(),
        };

        Ok(Self {
            language,

            register_endpoint: std::env::var("REGISTER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_REGISTER_ENDPOINT.to_string()),
            request_timeout_secs: std::env::var("REGISTER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            mock_server_port: std::env::var("MOCK_SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(9009),
        })
    }

    /// Apply a language tag given on the command line.
    pub fn with_language_arg(mut self, arg: Option<&str>) -> Result<Self> {
        if let Some(code) = arg {
            self.language = Language::from_code(code)
                .with_context(|| format!("Unsupported language argument '{}'", code))?;
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default_language(),
            register_endpoint: DEFAULT_REGISTER_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            mock_server_port: 9009,
        }
    }
}
