//! Error types for the agenda store.

use thiserror::Error;

/// Errors that can occur when touching the persistent slot.
///
/// "Nothing matched" is never an error; update and delete report missing
/// targets through their return values instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Slot error: {0}")]
    Slot(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
