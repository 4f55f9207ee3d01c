//! Projection of a submission outcome into the single status line.

use serde::{Deserialize, Serialize};

use super::messages::Locale;

/// Why a submission that passed validation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SubmissionFailure {
    /// The API answered with an error body carrying a `message`.
    Structured(String),
    /// Transport or HTTP failure without a structured body.
    Transport(String),
    /// Anything else that went wrong while submitting.
    Unknown,
}

/// Result of the latest submission attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatusMessage {
    Created,
    Failed { failure: SubmissionFailure },
}

impl StatusMessage {
    pub fn from_outcome(outcome: Result<(), SubmissionFailure>) -> Self {
        match outcome {
            Ok(()) => StatusMessage::Created,
            Err(failure) => StatusMessage::Failed { failure },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Created)
    }

    /// Render the status line in the given locale.
    pub fn render(&self, locale: Locale) -> String {
        let messages = locale.messages();
        match self {
            StatusMessage::Created => messages.created.to_string(),
            StatusMessage::Failed { failure } => match failure {
                SubmissionFailure::Structured(detail) | SubmissionFailure::Transport(detail) => {
                    format!("{} {}", messages.failure_prefix, detail)
                }
                SubmissionFailure::Unknown => messages.unknown_failure.to_string(),
            },
        }
    }
}
