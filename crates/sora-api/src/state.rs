//! Application state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::credentials::CredentialResolver;
use crate::services::{GenerationGateway, SoraClient};

/// Shared application state.
///
/// Holds only immutable configuration and shared clients; requests never
/// mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub gateway: GenerationGateway,
}

impl AppState {
    /// Create application state with credentials read from the environment.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        Self::with_credentials(config, CredentialResolver::from_env())
    }

    /// Create application state with a custom credential lookup.
    pub fn with_credentials(
        config: ApiConfig,
        credentials: CredentialResolver,
    ) -> Result<Self, reqwest::Error> {
        let sora = SoraClient::new(config.sora.clone())?;
        let gateway = GenerationGateway::new(credentials, Arc::new(sora));

        Ok(Self { config, gateway })
    }
}
