//! Error types for image transforms.

use thiserror::Error;

use crate::kind::FilterKind;

/// Errors that can occur while applying a named transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input could not be decoded, or the output could not be encoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// This transformer does not support the requested kind.
    #[error("unsupported transform: {kind}")]
    Unsupported { kind: FilterKind },
}
