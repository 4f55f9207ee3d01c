//! Client error types.

use evently_core::auth::AuthError;
use evently_core::event::SubmissionFailure;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Session error: {0}")]
    Auth(#[from] AuthError),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify this error for the status line.
    ///
    /// API errors with a `message` are structured; other API errors and
    /// network failures are transport failures; the rest is unknown.
    pub fn to_failure(&self) -> SubmissionFailure {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => SubmissionFailure::Structured(message.clone()),
            ClientError::Api {
                status,
                message: None,
            } => SubmissionFailure::Transport(format!(
                "Request failed with status code {}",
                status
            )),
            ClientError::Request(err) if !err.is_builder() => {
                SubmissionFailure::Transport(err.to_string())
            }
            _ => SubmissionFailure::Unknown,
        }
    }
}
