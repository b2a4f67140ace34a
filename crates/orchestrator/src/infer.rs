//! Inference capability seam.

use async_trait::async_trait;

use detector_client::{DetectorClient, DetectorError, Prediction};

/// Object detection capability.
///
/// Implemented by [`DetectorClient`] for the real service; tests substitute
/// in-process stubs. The call is expected to take non-trivial wall-clock
/// time — the detection orchestrator wraps it in a deadline.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Run detection against an image staged under `img_name`.
    async fn predict(&self, img_name: &str) -> Result<Prediction, DetectorError>;
}

#[async_trait]
impl Detector for DetectorClient {
    async fn predict(&self, img_name: &str) -> Result<Prediction, DetectorError> {
        DetectorClient::predict(self, img_name).await
    }
}
