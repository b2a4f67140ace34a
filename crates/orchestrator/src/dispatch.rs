//! Message dispatch: classify, route, and guarantee a reply.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::command::{classify, Command};
use crate::config::ProcessingMode;
use crate::detection::DetectionOrchestrator;
use crate::error::RelayError;
use crate::filter::FilterOrchestrator;
use crate::message::InboundMessage;
use crate::sender::ReplySender;

/// Reply sent for a photo that arrives without a caption in filter mode.
pub const NO_CAPTION_REPLY: &str = "Photo received with no caption.";

/// Reply sent for a message shape the relay cannot process.
pub const UNSUPPORTED_REPLY: &str = "Send me text, or a photo with a caption.";

/// Generic reply sent when processing fails. The concrete failure is
/// logged, never exposed to the user.
pub const PROCESSING_ERROR_REPLY: &str = "There was an error processing the image.";

/// Routes each inbound message to its processing strategy.
///
/// `handle` is the relay's outermost boundary: every message ends in
/// exactly one outbound reply, and no failure escapes unanswered or
/// unlogged.
pub struct Dispatcher {
    mode: ProcessingMode,
    filter: FilterOrchestrator,
    detection: DetectionOrchestrator,
    sender: Arc<dyn ReplySender>,
}

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new(
        mode: ProcessingMode,
        filter: FilterOrchestrator,
        detection: DetectionOrchestrator,
        sender: Arc<dyn ReplySender>,
    ) -> Self {
        Self {
            mode,
            filter,
            detection,
            sender,
        }
    }

    /// The configured processing mode.
    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Process one inbound message end-to-end.
    ///
    /// Classifies the message, routes it, and converts any processing
    /// failure into the generic error reply. Delivery failures are logged
    /// and not retried — when the transport itself is down there is no
    /// channel left to apologize on.
    pub async fn handle(&self, msg: &InboundMessage) {
        let command = classify(msg, self.mode);
        info!(
            "Dispatching message from chat {} as {}",
            msg.chat_id,
            command_name(&command)
        );

        if let Err(e) = self.route(msg, command).await {
            match e {
                RelayError::Delivery(ref reason) => {
                    error!("Reply delivery failed for chat {}: {}", msg.chat_id, reason);
                }
                e => {
                    error!("Processing failed for chat {}: {}", msg.chat_id, e);
                    if let Err(send_err) = self
                        .sender
                        .send_text(msg.chat_id, PROCESSING_ERROR_REPLY)
                        .await
                    {
                        error!(
                            "Failed to deliver error reply to chat {}: {}",
                            msg.chat_id, send_err
                        );
                    }
                }
            }
        }
    }

    /// Route a classified command to its strategy.
    async fn route(&self, msg: &InboundMessage, command: Command) -> Result<(), RelayError> {
        let chat_id = msg.chat_id;

        match command {
            Command::PlainText(text) => {
                self.sender
                    .send_text(chat_id, &format!("Your original message: {}", text))
                    .await
            }

            Command::NoCaption => self.sender.send_text(chat_id, NO_CAPTION_REPLY).await,

            Command::UnknownCaption(caption) => {
                self.sender
                    .send_text(chat_id, &format!("Unknown command: {}", caption))
                    .await
            }

            Command::Unsupported => {
                debug!("Unsupported message shape from chat {}", chat_id);
                self.sender.send_text(chat_id, UNSUPPORTED_REPLY).await
            }

            Command::FilterCommand { photo, kind } => {
                let output = self.filter.run(&photo, kind).await?;
                self.sender.send_photo(chat_id, &output).await
            }

            Command::DetectionRequest { photo } => {
                // The detection orchestrator sends its own replies.
                let reply = self.detection.run(&photo, chat_id).await?;
                debug!(
                    "Detection {} replied to chat {} (annotated: {})",
                    reply.request_id, chat_id, reply.annotated_sent
                );
                Ok(())
            }
        }
    }
}

/// Short command name for logs, without payload noise.
fn command_name(command: &Command) -> &'static str {
    match command {
        Command::PlainText(_) => "plain_text",
        Command::NoCaption => "no_caption",
        Command::FilterCommand { .. } => "filter_command",
        Command::UnknownCaption(_) => "unknown_caption",
        Command::DetectionRequest { .. } => "detection_request",
        Command::Unsupported => "unsupported",
    }
}
