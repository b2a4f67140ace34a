//! Prediction store error types.

use thiserror::Error;

/// Errors that can occur during prediction persistence.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Label list could not be encoded or decoded.
    #[error("label encoding error: {0}")]
    Labels(#[from] serde_json::Error),

    /// Record not found
    #[error("prediction not found: {id}")]
    NotFound { id: String },
}

/// Result type for prediction store operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
