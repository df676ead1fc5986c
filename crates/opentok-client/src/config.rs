//! OpenTok client configuration.
//!
//! Holds the project credentials, the REST base URL, and the request
//! timeout handed to the transport. Defaults point to the production
//! endpoint. Override via environment variables or explicit construction.

use opentok_core::{validate_default_timeout, ApiKey, ApiSecret, ApiUrl, ValidationError};

/// Production REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.opentok.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for an OpenTok project.
///
/// `Debug` output never contains the API secret.
#[derive(Debug, Clone)]
pub struct OpenTokConfig {
    /// Project API key.
    pub api_key: ApiKey,
    /// Project API secret.
    pub api_secret: ApiSecret,
    /// REST base URL.
    pub api_url: ApiUrl,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OpenTokConfig {
    /// Create a configuration with the default URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if [`DEFAULT_API_URL`] fails to parse.
    pub fn new(api_key: ApiKey, api_secret: ApiSecret) -> Result<Self, ConfigError> {
        let api_url = ApiUrl::new(DEFAULT_API_URL).map_err(|source| ConfigError::Invalid {
            var: "OPENTOK_API_URL",
            source,
        })?;
        Ok(Self {
            api_key,
            api_secret,
            api_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Replace the REST base URL.
    pub fn with_api_url(mut self, url: &str) -> Result<Self, ValidationError> {
        self.api_url = ApiUrl::new(url)?;
        Ok(self)
    }

    /// Replace the request timeout. Zero is rejected.
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ValidationError> {
        validate_default_timeout(secs)?;
        self.timeout_secs = secs;
        Ok(self)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `OPENTOK_API_KEY` (required, digits)
    /// - `OPENTOK_API_SECRET` (required)
    /// - `OPENTOK_API_URL` (default: `https://api.opentok.com`)
    /// - `OPENTOK_TIMEOUT_SECS` (default: 30, must be positive)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_key = lookup("OPENTOK_API_KEY").ok_or(ConfigError::Missing("OPENTOK_API_KEY"))?;
        let api_key = ApiKey::new(raw_key).map_err(|source| ConfigError::Invalid {
            var: "OPENTOK_API_KEY",
            source,
        })?;
        let api_secret = lookup("OPENTOK_API_SECRET")
            .map(ApiSecret::new)
            .ok_or(ConfigError::Missing("OPENTOK_API_SECRET"))?;

        let mut config = Self::new(api_key, api_secret)?;

        if let Some(url) = lookup("OPENTOK_API_URL") {
            config = config.with_api_url(&url).map_err(|source| ConfigError::Invalid {
                var: "OPENTOK_API_URL",
                source,
            })?;
        }

        if let Some(raw) = lookup("OPENTOK_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config
                .with_timeout_secs(secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?;
        }

        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("invalid value for {var}: {source}")]
    Invalid {
        var: &'static str,
        source: ValidationError,
    },
    #[error("invalid OPENTOK_TIMEOUT_SECS \"{0}\": expected a positive number of seconds")]
    InvalidTimeout(String),
}
