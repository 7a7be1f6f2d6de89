//! Error body returned by the gateway.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::request::FieldErrors;

/// `{ "error": ... }` where the payload is either a message or per-field violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(FieldErrors),
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail::Message(message.into()),
        }
    }

    pub fn fields(errors: FieldErrors) -> Self {
        Self {
            error: ErrorDetail::Fields(errors),
        }
    }

    /// The error text, when the body carries a plain message.
    pub fn as_message(&self) -> Option<&str> {
        match &self.error {
            ErrorDetail::Message(message) => Some(message),
            ErrorDetail::Fields(_) => None,
        }
    }
}
