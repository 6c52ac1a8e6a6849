//! Error types for the local library store.

use thiserror::Error;

/// Errors that can occur during library store operations.
///
/// Malformed persisted data is deliberately NOT represented here: corrupt
/// storage is treated as an empty collection at the backend, never raised
/// to the caller.
#[derive(Debug, Error)]
pub enum LibraryStorageError {
    #[error("Invalid library entry: {message}")]
    InvalidEntry {
        message: String,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Data conversion failed: {message}")]
    DataConversionError {
        message: String,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Storage backend error")]
    BackendError {
        #[source]
        source: Option<eyre::Report>,
    },
}

/// Result type alias for library store operations.
pub type Result<T> = std::result::Result<T, LibraryStorageError>;
