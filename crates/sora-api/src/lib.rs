//! Axum HTTP gateway in front of the Sora video generation API.
//!
//! This crate provides:
//! - `POST /api/generate`: request validation, credential resolution,
//!   upstream submission and response normalization
//! - Liveness/readiness probes
//! - Security headers, request IDs and request logging
//! - Prometheus metrics

pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use config::{ApiConfig, SoraConfig};
pub use credentials::{Credential, CredentialResolver};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{GenerationGateway, SoraClient};
pub use state::AppState;
