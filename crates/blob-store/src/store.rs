//! The BlobStore trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Opaque put/get storage of named blobs.
///
/// Keys are flat strings; prefixes like `predictions/` are a naming
/// convention, not directory semantics. Implementations must be safe for
/// concurrent use — one relay processes many chats in parallel.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under the given key, replacing any existing blob.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Fetch the blob stored under the given key.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;
}

/// An in-memory blob store for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs currently stored.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether the store holds no blobs.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }

    /// List all stored keys.
    pub async fn keys(&self) -> Vec<String> {
        self.blobs.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_put_get() {
        let store = MemoryBlobStore::new();
        store.put("uploads/1/a.jpg", b"bytes").await.unwrap();

        let fetched = store.get("uploads/1/a.jpg").await.unwrap();
        assert_eq!(fetched, b"bytes");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_memory_get_missing() {
        let store = MemoryBlobStore::new();
        let result = store.get("nope").await;
        assert!(matches!(result, Err(StoreError::NotFound { key }) if key == "nope"));
    }

    #[tokio::test]
    async fn test_memory_put_overwrites() {
        let store = MemoryBlobStore::new();
        store.put("k", b"one").await.unwrap();
        store.put("k", b"two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), b"two");
    }
}
