//! Client configuration — explicit value, injected at construction.
//!
//! The config is immutable once the client is built. `from_env` is a
//! convenience for binaries; library callers construct the value directly
//! so tests never touch the filesystem or environment.

use crate::error::ConfigError;
use crate::network::DEFAULT_API_URL;

/// Environment variable names read by [`AliceConfig::from_env`].
const ENV_API_URL: &str = "ALICE_API_URL";
const ENV_API_KEY: &str = "ALICE_API_KEY";
const ENV_BASIC_AUTH: &str = "ALICE_BASIC_AUTH";

/// Immutable client configuration for the Alice staff API.
#[derive(Debug, Clone)]
pub struct AliceConfig {
    /// Base URI root, without the `staff/v1` prefix.
    pub base_url: String,
    /// API key sent as the `apikey` query parameter on every request.
    pub api_key: String,
    /// Static `authorization` header value (basic auth).
    pub authorization: String,
}

impl AliceConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        authorization: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            authorization: authorization.into(),
        }
    }

    /// Load configuration from the environment (reading `.env` if present).
    ///
    /// `ALICE_API_KEY` and `ALICE_BASIC_AUTH` are required; `ALICE_API_URL`
    /// falls back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key =
            std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;
        let authorization =
            std::env::var(ENV_BASIC_AUTH).map_err(|_| ConfigError::MissingVar(ENV_BASIC_AUTH))?;

        Ok(Self {
            base_url,
            api_key,
            authorization,
        })
    }
}
