//! Sora video API client.
//!
//! Creates video jobs and normalizes the response into an [`UpstreamJob`].
//! No retries and no timeout beyond the transport default.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sora_models::{GenerationRequest, UpstreamJob, VideoConfig};
use tracing::{debug, warn};

use crate::config::SoraConfig;
use crate::credentials::Credential;
use crate::error::{ApiError, ApiResult, UNKNOWN_UPSTREAM_ERROR};

/// Job-creation payload.
#[derive(Debug, Serialize)]
struct CreateVideoPayload<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a VideoConfig>,
}

/// Job fields of a job-creation response.
#[derive(Debug, Deserialize)]
struct VideoJobResponse {
    id: Option<String>,
    status: Option<String>,
    #[serde(default)]
    assets: Option<VideoAssets>,
}

#[derive(Debug, Deserialize)]
struct VideoAssets {
    video: Option<AssetRef>,
    thumbnail: Option<AssetRef>,
}

#[derive(Debug, Deserialize)]
struct AssetRef {
    url: Option<String>,
}

/// Message of an embedded `error`, if the value counts as one.
///
/// `null`, `false`, `0` and `""` do not. Anything else does, and falls back
/// to [`UNKNOWN_UPSTREAM_ERROR`] when it carries no string `message`.
fn embedded_error(value: &Value) -> Option<String> {
    let present = match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    if !present {
        return None;
    }
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_UPSTREAM_ERROR);
    Some(message.to_string())
}

/// Normalize a decoded 2xx body into an [`UpstreamJob`].
///
/// An embedded error wins over the job fields, whatever their shape.
fn normalize_job(body: Value) -> ApiResult<UpstreamJob> {
    if let Some(message) = body.get("error").and_then(embedded_error) {
        let text = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        return Ok(UpstreamJob {
            id: text("id"),
            status: text("status"),
            video_url: None,
            thumbnail_url: None,
            error_message: Some(message),
        });
    }

    let job: VideoJobResponse = serde_json::from_value(body).map_err(|e| {
        ApiError::upstream(format!("Failed to parse video API response: {}", e))
    })?;

    let (video_url, thumbnail_url) = match job.assets {
        Some(assets) => (
            assets.video.and_then(|a| a.url),
            assets.thumbnail.and_then(|a| a.url),
        ),
        None => (None, None),
    };

    match (job.id, job.status) {
        (Some(id), Some(status)) => Ok(UpstreamJob {
            id,
            status,
            video_url,
            thumbnail_url,
            error_message: None,
        }),
        _ => Err(ApiError::upstream(
            "Failed to parse video API response: missing job id or status",
        )),
    }
}

/// Client for the upstream video-job API.
pub struct SoraClient {
    http: Client,
    config: SoraConfig,
}

impl SoraClient {
    /// Create a new client.
    pub fn new(config: SoraConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Create a video job for `request`.
    ///
    /// A 2xx response with an embedded `error` object is returned as an
    /// [`UpstreamJob`] with `error_message` set; deciding what to do with it
    /// is up to the caller.
    pub async fn create_video(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> ApiResult<UpstreamJob> {
        let url = self.config.videos_url();
        let payload = CreateVideoPayload {
            model: &self.config.model,
            prompt: &request.prompt,
            config: request.config.as_ref(),
        };

        debug!(
            url = %url,
            model = %payload.model,
            has_config = payload.config.is_some(),
            credential_source = credential.source(),
            "Creating video job"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(credential.secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Video API request failed: {}", e);
                ApiError::UpstreamUnavailable(format!("Video API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                warn!(status = status.as_u16(), "Failed to read video API error body: {}", e);
                String::new()
            });
            warn!(status = status.as_u16(), "Video API returned an error status");
            return Err(ApiError::UpstreamStatus {
                status,
                message: format!("Video API returned {}: {}", status.as_u16(), error_text),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            ApiError::upstream(format!("Failed to parse video API response: {}", e))
        })?;

        normalize_job(body)
    }
}
