//! Error types for the Dropstab CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// API communication and configuration errors
    #[error("API error: {0}")]
    Api(#[from] dropstab_sdk::ApiError),

    /// Email or password not supplied
    #[error("Missing {0}: pass --{0} or set {1}")]
    MissingCredential(&'static str, &'static str),

    /// Response could not be rendered
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
