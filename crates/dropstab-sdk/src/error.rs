//! Error types for the Dropstab SDK
//!
//! Every layer of the SDK returns [`ApiError`] and propagates it unchanged,
//! so the error a caller sees is the one produced where the failure happened.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the Dropstab SDK
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A 2xx body that does not fit the requested type
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// No refresh token is held, so no access token can be obtained
    #[error("No refresh token available. Please log in again.")]
    Unauthenticated,

    /// Invalid configuration or HTTP client setup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::HttpClient(e) => e.status(),
            _ => None,
        }
    }

    /// True when the failure is the local missing-refresh-token condition
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    /// True for 4xx responses
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }
}
