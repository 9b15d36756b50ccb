//! Core error types for multiblast

pub mod details;

use thiserror::Error;
pub use details::{ApiResult, ErrorDetails, InvalidInputErrors};

/// Main error type for multiblast operations
#[derive(Error, Debug)]
pub enum MultiBlastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Request(ErrorDetails),

    #[error("Job {0} could not be queued")]
    Queueing(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for multiblast operations
pub type MultiBlastResult<T> = Result<T, MultiBlastError>;

impl From<serde_json::Error> for MultiBlastError {
    fn from(err: serde_json::Error) -> Self {
        MultiBlastError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for MultiBlastError {
    fn from(err: anyhow::Error) -> Self {
        MultiBlastError::Other(err.to_string())
    }
}

impl From<ErrorDetails> for MultiBlastError {
    fn from(details: ErrorDetails) -> Self {
        match details {
            ErrorDetails::NotFound { message } => {
                MultiBlastError::NotFound(message.unwrap_or_else(|| "resource".to_string()))
            }
            other => MultiBlastError::Request(other),
        }
    }
}
