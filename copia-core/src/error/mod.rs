//! Core error types for copia

use thiserror::Error;

/// Main error type for copia operations
#[derive(Error, Debug)]
pub enum CopiaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Result type alias for copia operations
pub type CopiaResult<T> = Result<T, CopiaError>;
