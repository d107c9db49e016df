//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rule engine error (configuration, rule data, unsupported locale)
    #[error("rule engine error: {0}")]
    Rules(#[from] syllab_core::RuleError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
