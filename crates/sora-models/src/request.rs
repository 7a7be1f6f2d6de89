//! Generation request and field-level validation errors.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Open-ended advanced configuration passed through to the video API.
pub type VideoConfig = serde_json::Map<String, serde_json::Value>;

/// Message used when `prompt` is present but empty.
pub const PROMPT_TOO_SHORT: &str = "String must contain at least 1 character(s)";

/// A request to generate a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct GenerationRequest {
    /// Natural-language description of the video
    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub prompt: String,

    /// Optional structured parameters (duration, aspect ratio, camera, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<VideoConfig>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: VideoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Run the declarative checks and collect them per field.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

/// Validation failures keyed by field name.
///
/// Serializes as `{ "<field>": ["<message>", ...] }` so callers can
/// discriminate by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every message across all fields, in field order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}
