//! Object detection service client library.
//!
//! This crate provides a Rust client for the detection service's HTTP API.
//! A prediction request names an image already staged in the object store;
//! the service runs inference, uploads an annotated image, persists the
//! record, and returns it.
//!
//! # Example
//!
//! ```no_run
//! use detector_client::{DetectorClient, DetectorConfig};
//!
//! # async fn example() -> Result<(), detector_client::DetectorError> {
//! let client = DetectorClient::new(DetectorConfig::new("http://localhost:8081"))?;
//!
//! let prediction = client.predict("uploads/42/photo.jpg").await?;
//! for label in &prediction.labels {
//!     println!("{} at ({:.2}, {:.2})", label.class, label.cx, label.cy);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{DetectorClient, DetectorConfig};
pub use error::DetectorError;
pub use types::{annotated_key, Label, Prediction};
