//! Upstream video jobs and the normalized gateway response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status the video API reports for a job that was accepted but not rendered yet.
pub const QUEUED_STATUS: &str = "queued";

/// Whether `status` means the job is still waiting upstream.
///
/// Any other status is reported as finished; the video API's full status
/// enumeration is not modelled here.
pub fn is_queued(status: &str) -> bool {
    status == QUEUED_STATUS
}

/// A video job as reported by the upstream API, after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpstreamJob {
    /// Opaque upstream job ID
    pub id: String,
    /// Upstream job status (e.g. "queued", "completed")
    pub status: String,
    /// Rendered video URL, once available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Thumbnail URL, once available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Error embedded in an otherwise successful response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl UpstreamJob {
    pub fn is_queued(&self) -> bool {
        is_queued(&self.status)
    }
}

/// Success body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub job_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl GenerateResponse {
    pub fn is_queued(&self) -> bool {
        is_queued(&self.status)
    }
}

impl From<UpstreamJob> for GenerateResponse {
    fn from(job: UpstreamJob) -> Self {
        Self {
            job_id: job.id,
            status: job.status,
            video_url: job.video_url,
            thumbnail_url: job.thumbnail_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(status: &str) -> UpstreamJob {
        UpstreamJob {
            id: "job_1".to_string(),
            status: status.to_string(),
            video_url: None,
            thumbnail_url: None,
            error_message: None,
        }
    }

    #[test]
    fn test_queued_detection() {
        assert!(job("queued").is_queued());
        assert!(!job("completed").is_queued());
        assert!(!job("Queued").is_queued());
    }

    #[test]
    fn test_response_omits_missing_urls() {
        let response = GenerateResponse::from(job("queued"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "jobId": "job_1", "status": "queued" }));
    }

    #[test]
    fn test_response_carries_urls() {
        let mut finished = job("completed");
        finished.video_url = Some("https://x/video.mp4".to_string());
        finished.thumbnail_url = Some("https://x/thumb.jpg".to_string());

        let value = serde_json::to_value(GenerateResponse::from(finished)).unwrap();
        assert_eq!(value["videoUrl"], "https://x/video.mp4");
        assert_eq!(value["thumbnailUrl"], "https://x/thumb.jpg");
    }

    #[test]
    fn test_response_deserializes_without_urls() {
        let response: GenerateResponse =
            serde_json::from_value(json!({ "jobId": "job_9", "status": "queued" })).unwrap();
        assert_eq!(response.job_id, "job_9");
        assert!(response.video_url.is_none());
        assert!(response.is_queued());
    }
}
