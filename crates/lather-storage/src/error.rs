//! Storage error types.

use thiserror::Error;

/// Errors that can occur in the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing store could not be read or written.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Filesystem error from the file-backed store.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
