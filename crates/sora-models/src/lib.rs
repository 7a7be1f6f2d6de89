//! Shared data models for the Sora video studio.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests and field-addressable validation errors
//! - Normalized upstream video jobs and the gateway response shape
//! - Error bodies returned by the gateway
//! - Curated presets used to pre-populate the request form

pub mod error_body;
pub mod job;
pub mod preset;
pub mod request;

// Re-export common types
pub use error_body::{ErrorBody, ErrorDetail};
pub use job::{is_queued, GenerateResponse, UpstreamJob, QUEUED_STATUS};
pub use preset::Preset;
pub use request::{FieldErrors, GenerationRequest, VideoConfig};
