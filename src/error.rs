//! Error types for the finance advisor

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {

    // =============================
    // Core Errors
    // =============================

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdvisorError {
    /// True for failures caused by the caller's figures rather than the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::InvalidInput(_) | AdvisorError::DivisionByZero(_)
        )
    }
}
