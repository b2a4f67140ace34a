//! Named image transforms for photo messages.
//!
//! This crate defines the [`FilterKind`] command set users select via photo
//! captions, the [`Transformer`] capability the orchestration core sequences
//! against, and [`LocalTransformer`], an implementation backed by the
//! `image` crate.

pub mod error;
pub mod kind;
pub mod transform;

pub use error::TransformError;
pub use kind::FilterKind;
pub use transform::{LocalTransformer, Transformer};
