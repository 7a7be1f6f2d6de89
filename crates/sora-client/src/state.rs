//! Submission state machine states.

use serde::Serialize;
use sora_models::{GenerateResponse, VideoConfig};

/// Message for a job the video API accepted but has not rendered yet.
pub const QUEUED_MESSAGE: &str = "Request sent! Monitoring the job while it processes.";

/// Message for any non-queued status.
pub const READY_MESSAGE: &str = "Video ready!";

/// Where a submission currently stands.
///
/// `Idle -> Submitting -> Success | Error`; preset loads and resets go back
/// to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success(SubmissionOutcome),
    Error { message: String },
}

/// Payload of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub message: String,
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Configuration that was sent, echoed back for transparency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_echo: Option<VideoConfig>,
}

impl SubmissionOutcome {
    pub fn from_response(response: GenerateResponse, config_echo: Option<VideoConfig>) -> Self {
        let message = if response.is_queued() {
            QUEUED_MESSAGE
        } else {
            READY_MESSAGE
        };

        Self {
            message: message.to_string(),
            job_id: response.job_id,
            video_url: response.video_url,
            thumbnail_url: response.thumbnail_url,
            config_echo,
        }
    }
}

impl SubmissionState {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// User-facing message, if the state carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(outcome) => Some(&outcome.message),
            Self::Error { message } => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            Self::Success(outcome) => Some(outcome),
            _ => None,
        }
    }
}
