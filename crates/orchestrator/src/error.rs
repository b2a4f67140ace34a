//! Error types for relay orchestration.

use std::time::Duration;

use blob_store::StoreError;
use detector_client::DetectorError;
use image_filters::TransformError;
use thiserror::Error;

/// Errors that can occur while processing one inbound message.
///
/// All variants except [`RelayError::Retrieve`] are fatal to the message's
/// processing attempt; `Retrieve` degrades the reply instead of aborting it
/// and is only surfaced in logs.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The photo reference could not be resolved to local bytes.
    #[error("photo acquisition failed: {0}")]
    Acquire(String),

    /// Uploading the photo to the object store failed.
    #[error("staging failed: {0}")]
    Stage(#[source] StoreError),

    /// The detection service call failed.
    #[error("inference failed: {0}")]
    Inference(#[from] DetectorError),

    /// The detection service did not answer within the deadline.
    #[error("inference timed out after {deadline:?}")]
    InferenceTimeout { deadline: Duration },

    /// The annotated image could not be fetched from the object store.
    #[error("annotated image retrieval failed: {0}")]
    Retrieve(#[source] StoreError),

    /// A named transform could not be applied.
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    /// An outbound reply could not be delivered.
    #[error("delivery failed: {0}")]
    Delivery(String),
}
