//! Video generation handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use sora_models::GenerateResponse;

use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// POST /api/generate
///
/// Takes the raw body so malformed JSON is reported as an invalid body
/// rather than an extractor rejection.
///
/// Returns:
/// - 200: `{ jobId, status, videoUrl?, thumbnailUrl? }`
/// - 400: malformed body or per-field validation errors
/// - 500: no credential configured, or the video API reported an error
/// - 502: video API unreachable
/// - other: status passed through from the video API
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<GenerateResponse>> {
    let result = state.gateway.handle(&body).await;

    metrics::record_generation(match &result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    });

    result.map(Json)
}
