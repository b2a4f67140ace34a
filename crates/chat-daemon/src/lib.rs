//! Chat bot daemon client library.
//!
//! This crate provides a Rust client for communicating with a Telegram-style
//! chat bot HTTP API. It supports:
//!
//! - Sending text and photo messages to chats
//! - Resolving and downloading photo attachments
//! - Receiving messages via long polling
//!
//! # Example
//!
//! ```no_run
//! use chat_daemon::{ChatClient, GatewayConfig};
//!
//! # async fn example() -> Result<(), chat_daemon::GatewayError> {
//! // Connect to the bot API
//! let config = GatewayConfig::new("https://api.telegram.org", "123:token");
//! let client = ChatClient::connect(config).await?;
//!
//! // Send a message
//! let sent = client.send_text(42, "Hello!").await?;
//! println!("Sent message id: {}", sent.message_id);
//!
//! // Subscribe to incoming updates
//! use futures::StreamExt;
//! let mut updates = std::pin::pin!(chat_daemon::subscribe(&client));
//! while let Some(result) = updates.next().await {
//!     match result {
//!         Ok(update) => {
//!             if let Some(msg) = update.message {
//!                 println!("From chat {}: {:?}", msg.chat.id, msg.text);
//!             }
//!         }
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod types;

pub use client::ChatClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use poll::{subscribe, subscribe_with_config, PollConfig};
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
