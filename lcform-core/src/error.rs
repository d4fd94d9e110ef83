// Error types for rule execution and engine configuration

use thiserror::Error;

/// Unexpected failure raised by a validation rule.
///
/// This is distinct from a rule that runs fine and reports
/// `succeeded = false`: a `RuleError` means the rule itself could not
/// produce a verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule failed: {0}")]
    Failed(String),

    #[error("Rule panicked: {0}")]
    Panicked(String),
}

impl RuleError {
    /// Create a rule failure with a message
    pub fn failed(message: impl Into<String>) -> Self {
        RuleError::Failed(message.into())
    }

    /// Raw message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            RuleError::Failed(message) | RuleError::Panicked(message) => message,
        }
    }
}

impl From<String> for RuleError {
    fn from(message: String) -> Self {
        RuleError::Failed(message)
    }
}

impl From<&str> for RuleError {
    fn from(message: &str) -> Self {
        RuleError::Failed(message.to_string())
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        RuleError::Failed(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
