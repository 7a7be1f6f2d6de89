//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Shown when the gateway rejects a request without a readable message.
pub const GENERATION_FAILED: &str = "Failed to generate video.";

/// Shown when a failure carries no message at all.
pub const SUBMISSION_FAILED: &str = "Could not send the prompt.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Local form validation failed; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The gateway answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected gateway response: {0}")]
    UnexpectedResponse(String),
}

impl ClientError {
    /// Text surfaced to the user.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            SUBMISSION_FAILED.to_string()
        } else {
            message
        }
    }
}
