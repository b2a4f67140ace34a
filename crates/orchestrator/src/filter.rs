//! Filter orchestrator: download → transform → saved result.

use std::path::PathBuf;
use std::sync::Arc;

use image_filters::{FilterKind, TransformError, Transformer};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::RelayError;
use crate::fetcher::PhotoFetcher;
use crate::message::PhotoRef;

/// Drives the local-only "download → apply named transform → save" strategy.
///
/// The orchestrator sequences the steps and stays agnostic to which concrete
/// filter runs; pixel work happens behind the [`Transformer`] capability.
pub struct FilterOrchestrator {
    fetcher: Arc<dyn PhotoFetcher>,
    transformer: Arc<dyn Transformer>,
    work_dir: PathBuf,
}

impl FilterOrchestrator {
    /// Create a new filter orchestrator.
    pub fn new(
        fetcher: Arc<dyn PhotoFetcher>,
        transformer: Arc<dyn Transformer>,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            transformer,
            work_dir: work_dir.into(),
        }
    }

    /// Apply `kind` to the referenced photo and return the saved result path.
    ///
    /// Fails with [`RelayError::Acquire`] if the photo cannot be fetched and
    /// [`RelayError::Transform`] if the transform cannot be applied. No
    /// partial output survives a failure.
    pub async fn run(&self, photo: &PhotoRef, kind: FilterKind) -> Result<PathBuf, RelayError> {
        // Per-request directory; concurrent messages never share paths.
        let request_dir = self.work_dir.join(Uuid::new_v4().simple().to_string());

        let input = self.fetcher.fetch(photo, &request_dir).await?;
        debug!("Fetched photo to {}", input.display());

        // Pixel work is CPU-bound; keep it off the async workers.
        let transformer = self.transformer.clone();
        let output = tokio::task::spawn_blocking(move || transformer.apply(kind, &input))
            .await
            .map_err(|e| {
                RelayError::Transform(TransformError::Io(std::io::Error::other(e.to_string())))
            })??;

        info!("Applied {} -> {}", kind, output.display());
        Ok(output)
    }
}
