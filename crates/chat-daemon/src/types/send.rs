//! Types for sending messages via the chat bot API.

use serde::{Deserialize, Serialize};

/// Parameters for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageParams {
    /// Target chat identifier.
    pub chat_id: i64,

    /// The message text.
    pub text: String,

    /// Message to reply to, if quoting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

impl SendMessageParams {
    /// Create params for a plain text message to a chat.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_to_message_id: None,
        }
    }

    /// Quote a previous message.
    pub fn with_reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }
}

/// Parameters for `getUpdates` long polling.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesParams {
    /// Identifier of the first update to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Long-poll timeout in seconds.
    pub timeout: u64,

    /// Maximum number of updates per batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Minimal acknowledgement of a sent message.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    /// Identifier assigned to the sent message.
    pub message_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_params_skip_reply() {
        let params = SendMessageParams::text(42, "hi");
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"chat_id\":42"));
        assert!(!json.contains("reply_to_message_id"));
    }

    #[test]
    fn test_send_message_params_with_reply() {
        let params = SendMessageParams::text(42, "hi").with_reply_to(7);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"reply_to_message_id\":7"));
    }
}
