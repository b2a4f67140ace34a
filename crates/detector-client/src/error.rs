//! Error types for detector-client.

use thiserror::Error;

/// Errors that can occur when calling the detection service.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source image was not found in the object store.
    #[error("source image not found: {key}")]
    SourceNotFound { key: String },

    /// Non-success response from the service.
    #[error("detector error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be parsed as a prediction.
    #[error("malformed prediction response: {0}")]
    Malformed(#[from] serde_json::Error),
}
