//! Errors raised by the user API collaborator.

use thiserror::Error;

/// Errors that can occur while fetching the current user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the API server
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match `{ "data": { ... } }`
    #[error("Failed to decode user response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failure reported by a custom collaborator, shown verbatim
    #[error("{0}")]
    Other(String),

    /// Configured token variable is not set
    #[error("Environment variable {env_var} not set")]
    MissingToken { env_var: String },
}

impl ApiError {
    /// Short machine-readable tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Request { .. } => "request_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::MissingToken { .. } => "missing_token",
            ApiError::Other(_) => "other",
        }
    }
}
