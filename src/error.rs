//! Error types for the ZapOp CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for ZapOp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Security alerts found: {count} alert(s) not covered by the ignore list")]
    AlertsFound { count: usize },

    #[error("Timed out after {waited:?} waiting for {stage} to complete")]
    Timeout { stage: &'static str, waited: Duration },
}

impl Error {
    /// Process exit code for this error. Alert policy failures get their
    /// own code so CI pipelines can tell them apart from plumbing errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::AlertsFound { .. } => 2,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the API key configured with `zapop init`.")]
    Unauthorized,

    #[error("Endpoint not found: {0}")]
    NotFound(String),

    #[error("ZAP error {code}: {message}")]
    Remote { code: String, message: String },

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to ZAP daemon".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No target URL. Pass a TARGET argument or set `target_url` in the config file.")]
    MissingTarget,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
