//! Submission controller: owns the form text and drives the state machine.

use scopeguard::ScopeGuard;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::form::validate_form;
use crate::gateway::GatewayClient;
use crate::presets::PresetCatalog;
use crate::state::{SubmissionOutcome, SubmissionState};

/// Holds the prompt and advanced-config text and the current
/// [`SubmissionState`].
///
/// State changes are published on a watch channel; see [`Self::subscribe`].
pub struct SubmissionController {
    gateway: GatewayClient,
    presets: PresetCatalog,
    prompt: String,
    config_text: String,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    /// Create a controller with the built-in preset catalog.
    pub fn new(gateway: GatewayClient) -> Self {
        Self::with_presets(gateway, PresetCatalog::builtin())
    }

    pub fn with_presets(gateway: GatewayClient, presets: PresetCatalog) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            gateway,
            presets,
            prompt: String::new(),
            config_text: String::new(),
            state,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn config_text(&self) -> &str {
        &self.config_text
    }

    pub fn set_config_text(&mut self, config_text: impl Into<String>) {
        self.config_text = config_text.into();
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.borrow().is_submitting()
    }

    /// Validate the form and submit it to the gateway.
    ///
    /// Ends in `Success` or `Error`. If the returned future is dropped before
    /// completion the state goes back to `Idle` and the result is discarded.
    ///
    /// The `&mut self` borrow is what keeps a second submission from starting
    /// while one is in flight; the state is never `Submitting` on entry.
    pub async fn submit(&mut self) -> SubmissionState {
        self.state.send_replace(SubmissionState::Submitting);

        let pending = scopeguard::guard(&self.state, |state| {
            debug!("Submission abandoned before completion");
            state.send_replace(SubmissionState::Idle);
        });

        let next = self.attempt().await;

        let state = ScopeGuard::into_inner(pending);
        state.send_replace(next.clone());
        next
    }

    async fn attempt(&self) -> SubmissionState {
        let form = match validate_form(&self.prompt, &self.config_text) {
            Ok(form) => form,
            Err(errors) => {
                let error = ClientError::Validation(errors.to_string());
                debug!("Form rejected locally: {}", error);
                return SubmissionState::error(error.user_message());
            }
        };

        match self.gateway.generate(&form.to_request()).await {
            Ok(response) => {
                info!(job_id = %response.job_id, status = %response.status, "Generation accepted");
                SubmissionState::Success(SubmissionOutcome::from_response(response, form.config))
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                SubmissionState::error(e.user_message())
            }
        }
    }

    /// Replace the form with a preset and go back to `Idle`.
    ///
    /// Returns `false` (and changes nothing) for an unknown id.
    pub fn load_preset(&mut self, preset_id: &str) -> bool {
        let Some((prompt, config_text)) = self
            .presets
            .find(preset_id)
            .map(|preset| (preset.prompt.clone(), preset.config_text()))
        else {
            debug!(preset_id, "Unknown preset");
            return false;
        };

        self.prompt = prompt;
        self.config_text = config_text;
        self.state.send_replace(SubmissionState::Idle);
        true
    }

    /// Clear the form and go back to `Idle`.
    pub fn reset(&mut self) {
        self.prompt.clear();
        self.config_text.clear();
        self.state.send_replace(SubmissionState::Idle);
    }
}
