//! Object-detection relay bot.
//!
//! Receives chat messages, applies named image filters to captioned photos
//! or round-trips photos through the detection service, and replies in
//! chat. Configuration via .env file or environment variables:
//!
//!   ARGUS_BOT_TOKEN           - bot API token (required)
//!   ARGUS_CHAT_API_URL        - bot API base URL (default: https://api.telegram.org)
//!   ARGUS_STORE_URL           - object store base URL (required)
//!   ARGUS_BUCKET_NAME         - object store bucket (required)
//!   ARGUS_STORE_TOKEN         - object store bearer token (optional)
//!   ARGUS_DETECTOR_URL        - detection service base URL (default: http://localhost:8081)
//!   ARGUS_MODE                - "filter" or "detection" (default: filter)
//!   ARGUS_PREDICT_TIMEOUT_SECS - detection deadline (default: 60)
//!   ARGUS_WORK_DIR            - scratch directory (default: $TMPDIR/argus)
//!   ARGUS_DB_URL              - prediction database URL (optional)

mod gateway;

use std::env;
use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, error, info, warn};

use blob_store::{BlobStoreConfig, HttpBlobStore};
use chat_daemon::{ChatClient, GatewayConfig};
use detector_client::{DetectorClient, DetectorConfig};
use image_filters::LocalTransformer;
use orchestrator::{
    DetectionOrchestrator, Dispatcher, FilterOrchestrator, RelayConfig,
};
use prediction_store::PredictionStore;

use gateway::{to_inbound, ChatGateway};

fn require_env(name: &'static str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("{} must be set", name).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("argus_bot=info".parse().unwrap())
                .add_directive("orchestrator=info".parse().unwrap())
                .add_directive("chat_daemon=info".parse().unwrap()),
        )
        .init();

    let relay_config = RelayConfig::from_env()?;
    info!("Starting in {:?} mode", relay_config.mode);

    // Connect to the chat API
    let token = require_env("ARGUS_BOT_TOKEN")?;
    let api_url =
        env::var("ARGUS_CHAT_API_URL").unwrap_or_else(|_| "https://api.telegram.org".to_string());
    let client = ChatClient::connect(GatewayConfig::new(api_url, token)).await?;

    // Object store and detector clients
    let mut store_config = BlobStoreConfig::new(
        require_env("ARGUS_STORE_URL")?,
        require_env("ARGUS_BUCKET_NAME")?,
    );
    if let Ok(token) = env::var("ARGUS_STORE_TOKEN") {
        store_config = store_config.with_access_token(token);
    }
    let blob_store = Arc::new(HttpBlobStore::new(store_config)?);

    let detector_url =
        env::var("ARGUS_DETECTOR_URL").unwrap_or_else(|_| "http://localhost:8081".to_string());
    let detector = Arc::new(DetectorClient::new(DetectorConfig::new(detector_url))?);

    // Gateway adapters around the connected client
    let gateway = Arc::new(ChatGateway::new(client.clone()));

    let filter = FilterOrchestrator::new(
        gateway.clone(),
        Arc::new(LocalTransformer::new()),
        &relay_config.work_dir,
    );

    let mut detection = DetectionOrchestrator::new(
        gateway.clone(),
        blob_store,
        detector,
        gateway.clone(),
        relay_config.predict_deadline,
        &relay_config.work_dir,
    );

    // Optional prediction persistence
    if let Ok(db_url) = env::var("ARGUS_DB_URL") {
        let store = PredictionStore::connect(&db_url).await?;
        store.migrate().await?;
        detection = detection.with_prediction_store(store);
    } else {
        info!("ARGUS_DB_URL not set, prediction persistence disabled");
    }

    let dispatcher = Arc::new(Dispatcher::new(
        relay_config.mode,
        filter,
        detection,
        gateway.clone(),
    ));

    info!("Relay bot is running, waiting for messages");

    // Subscribe to updates and process each message as its own task
    let mut stream = std::pin::pin!(chat_daemon::subscribe(&client));

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                info!("Shutdown signal received, stopping relay");
                return Ok(());
            }

            next = stream.next() => {
                let Some(result) = next else {
                    warn!("Update stream ended");
                    return Ok(());
                };

                match result {
                    Ok(update) => {
                        let Some(message) = update.message else {
                            debug!("Ignoring update {} without message", update.update_id);
                            continue;
                        };

                        let inbound = to_inbound(&message);
                        let dispatcher = dispatcher.clone();

                        // One independent unit of work per message.
                        tokio::spawn(async move {
                            dispatcher.handle(&inbound).await;
                        });
                    }
                    Err(e) => {
                        // Polling already backs off; just surface the error.
                        error!("Update stream error: {}", e);
                    }
                }
            }
        }
    }
}
