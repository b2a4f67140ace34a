//! Error types for chat-daemon.

use thiserror::Error;

/// Errors that can occur when interacting with the chat bot API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the bot API.
    #[error("API error {code}: {description}")]
    Api { code: i32, description: String },

    /// Connection to the API server failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// API health check (getMe) failed.
    #[error("Health check failed")]
    HealthCheckFailed,

    /// A file referenced by the API could not be read or written locally.
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Outbound message delivery failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}
