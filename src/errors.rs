use thiserror::Error;

use crate::core::DuplicateEntryError;

/// Failures from persistence and configuration.
#[derive(Debug, Error)]
pub enum TransactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Data file is invalid: {0}")]
    InvalidData(#[from] DuplicateEntryError),
}

pub type Result<T> = std::result::Result<T, TransactError>;
