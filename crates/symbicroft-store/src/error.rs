//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage is not reachable in this execution context.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded.
    #[error("Corrupt value at {key}: {reason}")]
    Corrupt { key: String, reason: String },

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this error means the storage itself could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}
