//! Upstream access credential resolution.
//!
//! The credential is looked up on every call from an ordered list of
//! environment variables; the first non-empty value wins. Nothing is cached.

use std::fmt;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};

/// Service-specific key, generic platform key, public fallback key.
pub const CREDENTIAL_SOURCES: [&str; 3] =
    ["SORA_API_KEY", "OPENAI_API_KEY", "NEXT_PUBLIC_OPENAI_API_KEY"];

pub const MISSING_CREDENTIAL: &str = "No Sora/OpenAI access key is configured. \
     Set the SORA_API_KEY or OPENAI_API_KEY environment variable.";

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A resolved bearer secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    source: &'static str,
    secret: String,
}

impl Credential {
    /// Name of the variable the secret came from.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Ordered credential lookup.
#[derive(Clone)]
pub struct CredentialResolver {
    lookup: Lookup,
}

impl CredentialResolver {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve through a custom lookup (used by tests and embedders).
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// First non-empty credential in source order.
    pub fn resolve(&self) -> ApiResult<Credential> {
        CREDENTIAL_SOURCES
            .iter()
            .find_map(|&source| {
                (self.lookup)(source)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .map(|secret| Credential { source, secret })
            })
            .ok_or_else(|| ApiError::configuration(MISSING_CREDENTIAL))
    }

    pub fn is_configured(&self) -> bool {
        self.resolve().is_ok()
    }
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("sources", &CREDENTIAL_SOURCES)
            .finish()
    }
}
