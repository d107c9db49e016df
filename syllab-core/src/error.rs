use thiserror::Error;

/// Rule-engine errors
#[derive(Debug, Error)]
pub enum RuleError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported locale requested
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// A rule list could not be compiled into a matcher
    #[error("Invalid rule data in category '{category}': {reason}")]
    RuleData {
        /// The rule category that failed to compile
        category: String,
        /// What was wrong with the rule data
        reason: String,
    },
}

/// Result type for rule-engine operations
pub type Result<T> = std::result::Result<T, RuleError>;
