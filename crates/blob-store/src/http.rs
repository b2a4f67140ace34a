//! HTTP-backed blob store client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::StoreError;
use crate::store::BlobStore;

/// Configuration for the HTTP blob store.
#[derive(Debug, Clone)]
pub struct BlobStoreConfig {
    /// Base URL of the object store endpoint (e.g., "http://localhost:9000").
    pub base_url: String,
    /// Bucket/container name blobs live in.
    pub bucket: String,
    /// Optional bearer token for authenticated stores.
    pub access_token: Option<String>,
}

impl BlobStoreConfig {
    /// Create a new configuration for an unauthenticated store.
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: bucket.into(),
            access_token: None,
        }
    }

    /// Set the bearer token used for store requests.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// URL of the blob stored under `key`.
    ///
    /// Keys may contain `/` prefixes; each segment is percent-encoded.
    pub fn blob_url(&self, key: &str) -> String {
        let encoded = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}/{}", self.base_url, self.bucket, encoded)
    }
}

/// A blob store backed by an S3-style HTTP object store.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    http: Client,
    config: BlobStoreConfig,
}

impl HttpBlobStore {
    /// Create a new store client.
    pub fn new(config: BlobStoreConfig) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BlobStoreConfig {
        &self.config
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let url = self.config.blob_url(key);
        debug!("PUT {} ({} bytes)", url, bytes.len());

        let response = self
            .authorize(self.http.put(&url).body(bytes.to_vec()))
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::from_status(status.as_u16(), key));
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let url = self.config.blob_url(key);
        debug!("GET {}", url);

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::from_status(status.as_u16(), key));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| StoreError::Unreachable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_url_encodes_segments() {
        let config = BlobStoreConfig::new("http://localhost:9000", "images");
        assert_eq!(
            config.blob_url("predictions/abc_my photo.jpg"),
            "http://localhost:9000/images/predictions/abc_my%20photo.jpg"
        );
    }

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            StoreError::from_status(404, "k"),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            StoreError::from_status(403, "k"),
            StoreError::Unauthorized
        ));
        assert!(matches!(
            StoreError::from_status(500, "k"),
            StoreError::Unexpected { status: 500 }
        ));
    }
}
