//! Object store client for photo exchange.
//!
//! This crate provides the [`BlobStore`] trait — opaque put/get of named
//! blobs — plus an HTTP implementation for S3-style object stores and an
//! in-memory implementation for tests.
//!
//! # Example
//!
//! ```no_run
//! use blob_store::{BlobStore, BlobStoreConfig, HttpBlobStore};
//!
//! # async fn example() -> Result<(), blob_store::StoreError> {
//! let config = BlobStoreConfig::new("http://localhost:9000", "images");
//! let store = HttpBlobStore::new(config)?;
//!
//! store.put("uploads/42/photo.jpg", b"...").await?;
//! let bytes = store.get("uploads/42/photo.jpg").await?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod store;

pub use error::StoreError;
pub use http::{BlobStoreConfig, HttpBlobStore};
pub use store::{BlobStore, MemoryBlobStore};
