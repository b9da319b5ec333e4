//! Error types for rota.

use thiserror::Error;

/// Errors that can occur in rota operations.
#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for rota operations.
pub type RotaResult<T> = Result<T, RotaError>;
