//! HTTP client for the evently API.

pub mod events;

pub use events::EventsApi;

use evently_core::event::parse_error_message;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the evently API.
#[derive(Debug, Clone)]
pub struct EventlyClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventlyClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.as_str())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle responses whose body is not needed on success.
    ///
    /// Error bodies are read once and searched for a structured `message`.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: parse_error_message(&body),
        })
    }
}
