//! Message dispatch and multi-step request orchestration for the relay.
//!
//! This crate is the core of the relay: it classifies each inbound chat
//! message into exactly one [`Command`], routes it to the matching
//! processing strategy, and coordinates the chain of fallible remote calls
//! each strategy needs. It defines:
//!
//! - [`Dispatcher`] — classify + route + reply guarantee
//! - [`FilterOrchestrator`] — download → named transform → photo reply
//! - [`DetectionOrchestrator`] — upload → infer → download → summarize →
//!   reply
//! - [`ReplySender`] / [`PhotoFetcher`] / [`Detector`] — the gateway and
//!   inference capabilities the core is written against
//! - [`RelayError`] — the step-level error taxonomy
//!
//! The core has no dependency on any specific messaging transport; the
//! process entry point injects concrete clients behind the capability
//! traits.

pub mod command;
pub mod config;
pub mod detection;
pub mod dispatch;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod infer;
pub mod message;
pub mod sender;
pub mod summary;

pub use command::{classify, Command};
pub use config::{ConfigError, ProcessingMode, RelayConfig};
pub use detection::{staged_key, DetectionOrchestrator, DetectionReply};
pub use dispatch::{
    Dispatcher, NO_CAPTION_REPLY, PROCESSING_ERROR_REPLY, UNSUPPORTED_REPLY,
};
pub use error::RelayError;
pub use fetcher::PhotoFetcher;
pub use filter::FilterOrchestrator;
pub use infer::Detector;
pub use message::{InboundMessage, PhotoRef};
pub use sender::{LoggingSender, NoOpSender, ReplySender};
pub use summary::{summarize_labels, NO_OBJECTS_REPLY};
