//! Error types for blob storage operations.

use thiserror::Error;

/// Errors that can occur when talking to the object store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named blob does not exist.
    #[error("blob not found: {key}")]
    NotFound { key: String },

    /// The store rejected our credentials.
    #[error("store credentials rejected")]
    Unauthorized,

    /// The store could not be reached.
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// The store answered with an unexpected status.
    #[error("unexpected store response: HTTP {status}")]
    Unexpected { status: u16 },
}

impl StoreError {
    /// Classify an HTTP status into a store error for the given key.
    pub fn from_status(status: u16, key: &str) -> Self {
        match status {
            404 => Self::NotFound {
                key: key.to_string(),
            },
            401 | 403 => Self::Unauthorized,
            _ => Self::Unexpected { status },
        }
    }
}
