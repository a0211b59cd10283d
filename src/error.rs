//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] crate::sync::store::StoreError),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure (connect, TLS, malformed request). Returned to
    /// the caller; the SDK never terminates the process on these.
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The transport gave up following redirects. Non-retryable.
    #[error("Redirect loop for {url}")]
    Redirect { url: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Retry budget exhausted. Carries the failing URL.
    #[error("Request to {url} failed after {attempts} attempts: {last_error}")]
    RequestFailed {
        url: String,
        attempts: u32,
        last_error: String,
    },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid authorization header value: {0}")]
    InvalidAuthorization(String),
}
