//! Reply sender trait and implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::error::RelayError;

/// Outbound reply capability.
///
/// Abstracted to support different transports (chat daemon, tests, etc.)
/// Delivery failures surface as [`RelayError::Delivery`]; the core logs
/// them and never retries.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send a text reply to a chat.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), RelayError>;

    /// Send a local image file as a photo reply to a chat.
    async fn send_photo(&self, chat_id: i64, image_path: &Path) -> Result<(), RelayError>;
}

/// A no-op sender for testing that discards all replies.
#[derive(Debug, Clone, Default)]
pub struct NoOpSender;

#[async_trait]
impl ReplySender for NoOpSender {
    async fn send_text(&self, _chat_id: i64, _text: &str) -> Result<(), RelayError> {
        Ok(())
    }

    async fn send_photo(&self, _chat_id: i64, _image_path: &Path) -> Result<(), RelayError> {
        Ok(())
    }
}

/// A logging sender for debugging that logs all replies.
#[derive(Debug, Clone, Default)]
pub struct LoggingSender;

#[async_trait]
impl ReplySender for LoggingSender {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), RelayError> {
        tracing::info!("Sending text to {}: {}", chat_id, text);
        Ok(())
    }

    async fn send_photo(&self, chat_id: i64, image_path: &Path) -> Result<(), RelayError> {
        tracing::info!("Sending photo to {}: {}", chat_id, image_path.display());
        Ok(())
    }
}
