//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sora_models::{ErrorBody, FieldErrors};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback when the video API embeds an error without a message.
pub const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error while generating video.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request body is invalid.")]
    InvalidBody,

    #[error("Validation failed: {}", .0.fields().collect::<Vec<_>>().join(", "))]
    Validation(FieldErrors),

    #[error("{0}")]
    Configuration(String),

    /// Non-2xx transport status from the video API, passed through as-is.
    #[error("{message}")]
    UpstreamStatus { status: StatusCode, message: String },

    /// Error embedded in a 2xx video API response.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    UpstreamUnavailable(String),
}

impl ApiError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamStatus { status, .. } => *status,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBody => "invalid_body",
            ApiError::Validation(_) => "validation",
            ApiError::Configuration(_) => "configuration",
            ApiError::UpstreamStatus { .. } => "upstream_status",
            ApiError::Upstream(_) => "upstream_application",
            ApiError::UpstreamUnavailable(_) => "upstream_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::Validation(fields) => ErrorBody::fields(fields),
            other => ErrorBody::message(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
