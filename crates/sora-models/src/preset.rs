//! Curated example requests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::request::VideoConfig;

/// A read-only catalog entry used to pre-populate the request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Preset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<VideoConfig>,
}

impl Preset {
    /// Advanced-config text as shown in the form: pretty JSON, or empty.
    pub fn config_text(&self) -> String {
        self.config
            .as_ref()
            .and_then(|config| serde_json::to_string_pretty(config).ok())
            .unwrap_or_default()
    }
}
