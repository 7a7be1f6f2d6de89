//! Generation gateway: the trust boundary between clients and the video API.

use std::sync::Arc;

use sora_models::GenerateResponse;
use tracing::{info, warn};

use crate::credentials::CredentialResolver;
use crate::error::{ApiError, ApiResult};
use crate::services::sora::SoraClient;
use crate::validation::parse_generation_request;

/// Stateless request pipeline: validate, resolve credential, submit, normalize.
#[derive(Clone)]
pub struct GenerationGateway {
    credentials: CredentialResolver,
    sora: Arc<SoraClient>,
}

impl GenerationGateway {
    pub fn new(credentials: CredentialResolver, sora: Arc<SoraClient>) -> Self {
        Self { credentials, sora }
    }

    pub fn credentials(&self) -> &CredentialResolver {
        &self.credentials
    }

    /// Handle one raw `POST /api/generate` body.
    ///
    /// Every call creates a new upstream job; there is no idempotency key.
    pub async fn handle(&self, raw_body: &[u8]) -> ApiResult<GenerateResponse> {
        let request = parse_generation_request(raw_body)?;
        let credential = self.credentials.resolve()?;

        info!(
            prompt_len = request.prompt.len(),
            has_config = request.config.is_some(),
            "Submitting video generation"
        );

        let job = self.sora.create_video(&credential, &request).await?;

        if let Some(message) = job.error_message {
            warn!(job_id = %job.id, "Video API reported an error: {}", message);
            return Err(ApiError::Upstream(message));
        }

        info!(job_id = %job.id, status = %job.status, "Video job created");
        Ok(job.into())
    }
}
