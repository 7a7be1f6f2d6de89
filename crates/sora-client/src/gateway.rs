//! HTTP client for the generation gateway.

use reqwest::Client;
use sora_models::{ErrorBody, GenerateResponse, GenerationRequest};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult, GENERATION_FAILED};

/// Configuration for the gateway client.
#[derive(Debug, Clone)]
pub struct GatewayClientConfig {
    /// Base URL of the gateway (without `/api/generate`)
    pub base_url: String,
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl GatewayClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SORA_GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

/// Client for `POST /api/generate`.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    config: GatewayClientConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayClientConfig) -> ClientResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(GatewayClientConfig::from_env())
    }

    pub fn config(&self) -> &GatewayClientConfig {
        &self.config
    }

    /// Submit one generation request. Never retried.
    pub async fn generate(&self, request: &GenerationRequest) -> ClientResult<GenerateResponse> {
        let url = self.config.generate_url();
        debug!(url = %url, has_config = request.config.is_some(), "Submitting to gateway");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            // Field-level error maps and non-JSON bodies get the generic message
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.as_message().map(str::to_string))
                .unwrap_or_else(|| GENERATION_FAILED.to_string());
            warn!(status = status.as_u16(), "Gateway rejected generation: {}", message);
            return Err(ClientError::Rejected(message));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::UnexpectedResponse(e.to_string()))
    }
}
