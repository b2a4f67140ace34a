//! Update and message types from the chat bot API.

use serde::{Deserialize, Serialize};

/// A single update delivered by `getUpdates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier.
    pub update_id: i64,

    /// New inbound message, if this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// An inbound chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier, unique within the chat.
    pub message_id: i64,

    /// The chat this message was sent in.
    pub chat: Chat,

    /// Message timestamp (seconds since epoch).
    #[serde(default)]
    pub date: u64,

    /// Text content, for plain text messages.
    #[serde(default)]
    pub text: Option<String>,

    /// Caption attached to a photo message.
    #[serde(default)]
    pub caption: Option<String>,

    /// Available photo sizes, smallest first. Empty for non-photo messages.
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
}

impl Message {
    /// Whether this message carries a photo attachment.
    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }

    /// The largest available photo size, if any.
    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        self.photo.last()
    }
}

/// A chat the bot participates in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,

    /// Chat type ("private", "group", ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One resolution of a photo attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Identifier used to fetch the file contents.
    pub file_id: String,

    /// Identifier stable across bots, not usable for download.
    #[serde(default)]
    pub file_unique_id: Option<String>,

    /// Width in pixels.
    #[serde(default)]
    pub width: u32,

    /// Height in pixels.
    #[serde(default)]
    pub height: u32,

    /// Size in bytes, if known.
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// File metadata returned by `getFile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Identifier used to request this file.
    pub file_id: String,

    /// Size in bytes, if known.
    #[serde(default)]
    pub file_size: Option<u64>,

    /// Server-relative path to download the file contents.
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Bot identity returned by `getMe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotInfo {
    /// Bot user identifier.
    pub id: i64,

    /// Bot username, if set.
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photo_update() {
        let json = r#"{
            "update_id": 7,
            "message": {
                "message_id": 42,
                "chat": {"id": 1001, "type": "private"},
                "date": 1700000000,
                "caption": "blur",
                "photo": [
                    {"file_id": "small", "width": 90, "height": 60},
                    {"file_id": "large", "width": 1280, "height": 960, "file_size": 123456}
                ]
            }
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        let message = update.message.unwrap();
        assert!(message.has_photo());
        assert_eq!(message.largest_photo().unwrap().file_id, "large");
        assert_eq!(message.caption.as_deref(), Some("blur"));
        assert_eq!(message.chat.id, 1001);
    }

    #[test]
    fn test_parse_text_update() {
        let json = r#"{
            "update_id": 8,
            "message": {
                "message_id": 43,
                "chat": {"id": 1001},
                "text": "hello"
            }
        }"#;

        let update: Update = serde_json::from_str(json).unwrap();
        let message = update.message.unwrap();
        assert!(!message.has_photo());
        assert!(message.largest_photo().is_none());
        assert_eq!(message.text.as_deref(), Some("hello"));
    }
}
