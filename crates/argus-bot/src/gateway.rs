//! Chat daemon adapters for the orchestration capabilities.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chat_daemon::ChatClient;
use orchestrator::{InboundMessage, PhotoFetcher, PhotoRef, RelayError, ReplySender};

/// Chat-API-backed gateway implementing both orchestration capabilities.
#[derive(Clone)]
pub struct ChatGateway {
    client: ChatClient,
}

impl ChatGateway {
    /// Create a new gateway around a connected client.
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReplySender for ChatGateway {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), RelayError> {
        self.client
            .send_text(chat_id, text)
            .await
            .map_err(|e| RelayError::Delivery(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: i64, image_path: &Path) -> Result<(), RelayError> {
        self.client
            .send_photo(chat_id, image_path)
            .await
            .map_err(|e| RelayError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PhotoFetcher for ChatGateway {
    async fn fetch(&self, photo: &PhotoRef, dest_dir: &Path) -> Result<PathBuf, RelayError> {
        self.client
            .download_to(&photo.file_id, dest_dir)
            .await
            .map_err(|e| RelayError::Acquire(e.to_string()))
    }
}

/// Convert a wire message into the transport-independent inbound shape.
///
/// Total by design: even text-less, photo-less service messages convert,
/// and the dispatcher classifies them as unsupported.
pub fn to_inbound(message: &chat_daemon::Message) -> InboundMessage {
    let photo = message.largest_photo().map(|size| {
        let mut photo = PhotoRef::new(size.file_id.clone());
        photo.file_size = size.file_size;
        photo
    });

    InboundMessage {
        chat_id: message.chat.id,
        text: message.text.clone(),
        photo,
        caption: message.caption.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_daemon::{Chat, Message, PhotoSize};

    fn wire_message() -> Message {
        Message {
            message_id: 1,
            chat: Chat {
                id: 42,
                kind: Some("private".to_string()),
            },
            date: 0,
            text: None,
            caption: Some("blur".to_string()),
            photo: vec![
                PhotoSize {
                    file_id: "small".to_string(),
                    file_unique_id: None,
                    width: 90,
                    height: 60,
                    file_size: None,
                },
                PhotoSize {
                    file_id: "large".to_string(),
                    file_unique_id: None,
                    width: 1280,
                    height: 960,
                    file_size: Some(1024),
                },
            ],
        }
    }

    #[test]
    fn test_to_inbound_takes_largest_photo() {
        let inbound = to_inbound(&wire_message());
        assert_eq!(inbound.chat_id, 42);
        assert_eq!(inbound.photo.as_ref().unwrap().file_id, "large");
        assert_eq!(inbound.caption.as_deref(), Some("blur"));
    }

    #[test]
    fn test_to_inbound_text_only() {
        let mut message = wire_message();
        message.photo.clear();
        message.caption = None;
        message.text = Some("hi".to_string());

        let inbound = to_inbound(&message);
        assert!(inbound.photo.is_none());
        assert_eq!(inbound.text.as_deref(), Some("hi"));
    }
}
