//! Long-polling update stream.

use std::collections::VecDeque;
use std::time::Duration;

use futures::stream::Stream;
use tracing::{debug, warn};

use crate::client::ChatClient;
use crate::error::GatewayError;
use crate::types::Update;

/// Configuration for the update polling loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Long-poll timeout passed to `getUpdates`.
    pub poll_timeout: Duration,
    /// Delay before retrying after a failed poll.
    pub error_backoff: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_secs(30),
            error_backoff: Duration::from_secs(2),
        }
    }
}

struct PollState {
    client: ChatClient,
    config: PollConfig,
    offset: Option<i64>,
    buffered: VecDeque<Update>,
}

/// Subscribe to incoming updates with the default polling configuration.
pub fn subscribe(client: &ChatClient) -> impl Stream<Item = Result<Update, GatewayError>> + Send {
    subscribe_with_config(client, PollConfig::default())
}

/// Subscribe to incoming updates with a custom polling configuration.
///
/// The stream is endless: poll errors are yielded as `Err` items and polling
/// resumes after a backoff delay. Each yielded update advances the
/// acknowledged offset so it is not delivered again.
pub fn subscribe_with_config(
    client: &ChatClient,
    config: PollConfig,
) -> impl Stream<Item = Result<Update, GatewayError>> + Send {
    let state = PollState {
        client: client.clone(),
        config,
        offset: None,
        buffered: VecDeque::new(),
    };

    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(update) = state.buffered.pop_front() {
                state.offset = Some(update.update_id + 1);
                return Some((Ok(update), state));
            }

            match state
                .client
                .get_updates(state.offset, state.config.poll_timeout)
                .await
            {
                Ok(updates) => {
                    debug!("Polled {} updates", updates.len());
                    state.buffered.extend(updates);
                }
                Err(e) => {
                    warn!("Update poll failed: {}", e);
                    let backoff = state.config.error_backoff;
                    tokio::time::sleep(backoff).await;
                    return Some((Err(e), state));
                }
            }
        }
    })
}
