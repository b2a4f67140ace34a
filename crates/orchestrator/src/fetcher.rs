//! Photo acquisition trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::RelayError;
use crate::message::PhotoRef;

/// Inbound photo retrieval capability.
///
/// Resolves an opaque [`PhotoRef`] to a local file. Implementations fail
/// with [`RelayError::Acquire`] when the reference cannot be resolved.
#[async_trait]
pub trait PhotoFetcher: Send + Sync {
    /// Download the referenced photo into `dest_dir` and return its path.
    ///
    /// Implementations create `dest_dir` if it does not exist; callers may
    /// place derived files next to the returned path.
    async fn fetch(&self, photo: &PhotoRef, dest_dir: &Path) -> Result<PathBuf, RelayError>;
}
