//! Error types for the preference store

use notifier_common::NotifierError;
use thiserror::Error;

/// Errors that can occur when reading or writing the preference store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous writer panicked while holding the lock
    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for NotifierError {
    fn from(err: StoreError) -> Self {
        NotifierError::StorageError(err.to_string())
    }
}
