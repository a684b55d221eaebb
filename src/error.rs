//! Error types for sample-app.

use thiserror::Error;

/// Common error type for sample-app.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for sample-app operations.
pub type Result<T> = std::result::Result<T, AppError>;
