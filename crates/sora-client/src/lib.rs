//! Submission controller for the Sora video gateway.
//!
//! Turns raw form text (prompt + optional JSON configuration) into a
//! validated request, submits it to `POST /api/generate`, and reports every
//! outcome as exactly one [`SubmissionState`].

pub mod controller;
pub mod error;
pub mod form;
pub mod gateway;
pub mod presets;
pub mod state;

pub use controller::SubmissionController;
pub use error::{ClientError, ClientResult};
pub use form::{validate_form, FormErrors, ValidatedForm};
pub use gateway::{GatewayClient, GatewayClientConfig};
pub use presets::PresetCatalog;
pub use state::{SubmissionOutcome, SubmissionState};
