//! Health check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub credential: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    /// Variable the credential was found in; never the value itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness check endpoint (readiness probe).
/// Ready once an upstream credential is configured.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let (ok, credential) = match state.gateway.credentials().resolve() {
        Ok(credential) => (
            true,
            CheckStatus {
                status: "ok".to_string(),
                source: Some(credential.source().to_string()),
                error: None,
            },
        ),
        Err(e) => (
            false,
            CheckStatus {
                status: "error".to_string(),
                source: None,
                error: Some(e.to_string()),
            },
        ),
    };

    let response = ReadinessResponse {
        status: if ok { "ready" } else { "degraded" }.to_string(),
        checks: ReadinessChecks { credential },
    };

    if ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
