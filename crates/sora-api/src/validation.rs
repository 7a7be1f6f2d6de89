//! Trust-boundary parsing of `POST /api/generate` bodies.

use serde_json::Value;
use sora_models::{FieldErrors, GenerationRequest};

use crate::error::{ApiError, ApiResult};

/// Parse and validate a raw request body.
///
/// Unparseable JSON and non-object bodies are `InvalidBody`. Shape and
/// content violations are collected per field into `Validation`.
/// Unknown keys are ignored; `config` contents are not inspected.
pub fn parse_generation_request(raw: &[u8]) -> ApiResult<GenerationRequest> {
    let body: Value = serde_json::from_slice(raw).map_err(|_| ApiError::InvalidBody)?;
    let Value::Object(mut fields) = body else {
        return Err(ApiError::InvalidBody);
    };

    let mut errors = FieldErrors::new();

    let prompt = match fields.remove("prompt") {
        Some(Value::String(prompt)) => Some(prompt),
        None => {
            errors.add("prompt", "Required");
            None
        }
        Some(other) => {
            errors.add(
                "prompt",
                format!("Expected string, received {}", json_type(&other)),
            );
            None
        }
    };

    let config = match fields.remove("config") {
        None => None,
        Some(Value::Object(config)) => Some(config),
        Some(other) => {
            errors.add(
                "config",
                format!("Expected object, received {}", json_type(&other)),
            );
            None
        }
    };

    let prompt_is_string = prompt.is_some();
    let request = GenerationRequest {
        prompt: prompt.unwrap_or_default(),
        config,
    };

    if prompt_is_string {
        if let Err(violations) = request.check() {
            errors.merge(violations);
        }
    }

    errors.into_result().map_err(ApiError::Validation)?;
    Ok(request)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
