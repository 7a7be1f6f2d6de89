//! Local validation of the request form.
//!
//! Runs before any network call: a malformed configuration never leaves the
//! client.

use std::fmt;

use serde_json::Value;
use sora_models::{FieldErrors, GenerationRequest, VideoConfig};

pub const PROMPT_FIELD: &str = "prompt";
pub const CONFIG_FIELD: &str = "config";

pub const PROMPT_REQUIRED: &str = "Describe the video you want to generate.";
pub const CONFIG_INVALID_JSON: &str = "Advanced configuration must be valid JSON.";
pub const CONFIG_NOT_OBJECT: &str = "Advanced configuration must be a JSON object.";

/// Form fields in display order.
const FIELD_ORDER: [&str; 2] = [PROMPT_FIELD, CONFIG_FIELD];

/// A form that passed local validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    /// Trimmed prompt
    pub prompt: String,
    /// Parsed configuration; `None` when the text was blank
    pub config: Option<VideoConfig>,
}

impl ValidatedForm {
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            config: self.config.clone(),
        }
    }
}

/// Every field failure from one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FormErrors(FieldErrors);

impl FormErrors {
    pub fn fields(&self) -> &FieldErrors {
        &self.0
    }
}

impl fmt::Display for FormErrors {
    /// All messages, prompt first, joined by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = FIELD_ORDER
            .iter()
            .filter_map(|field| self.0.get(field))
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join(" "))
    }
}

/// Validate and parse the raw form text.
pub fn validate_form(prompt_text: &str, config_text: &str) -> Result<ValidatedForm, FormErrors> {
    let mut errors = FieldErrors::new();

    let prompt = prompt_text.trim();
    if prompt.is_empty() {
        errors.add(PROMPT_FIELD, PROMPT_REQUIRED);
    }

    let config = if config_text.trim().is_empty() {
        None
    } else {
        match serde_json::from_str::<Value>(config_text) {
            Ok(Value::Object(config)) => Some(config),
            Ok(_) => {
                errors.add(CONFIG_FIELD, CONFIG_NOT_OBJECT);
                None
            }
            Err(_) => {
                errors.add(CONFIG_FIELD, CONFIG_INVALID_JSON);
                None
            }
        }
    };

    errors.into_result().map_err(FormErrors)?;

    Ok(ValidatedForm {
        prompt: prompt.to_string(),
        config,
    })
}
