//! API configuration.

/// Default base URL of the upstream video API.
pub const DEFAULT_SORA_BASE_URL: &str = "https://api.openai.com/v1";

/// Model requested for every generation.
pub const DEFAULT_SORA_MODEL: &str = "sora-2.0";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Upstream video API settings
    pub sora: SoraConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1MB
            sora: SoraConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
            sora: SoraConfig::from_env(),
        }
    }
}

/// Upstream video API configuration.
///
/// Credentials are not part of this struct; they are resolved per request
/// by [`crate::CredentialResolver`].
#[derive(Debug, Clone)]
pub struct SoraConfig {
    /// Base URL, without the `/videos` suffix
    pub base_url: String,
    /// Model name sent in every payload
    pub model: String,
}

impl Default for SoraConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SORA_BASE_URL.to_string(),
            model: DEFAULT_SORA_MODEL.to_string(),
        }
    }
}

impl SoraConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SORA_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SORA_BASE_URL.to_string()),
            model: std::env::var("SORA_MODEL").unwrap_or_else(|_| DEFAULT_SORA_MODEL.to_string()),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Job-creation endpoint.
    pub fn videos_url(&self) -> String {
        format!("{}/videos", self.base_url.trim_end_matches('/'))
    }
}
