//! Wire types for the chat bot API.

mod send;
mod update;

pub use send::{GetUpdatesParams, SendMessageParams, SentMessage};
pub use update::{BotInfo, Chat, FileInfo, Message, PhotoSize, Update};
