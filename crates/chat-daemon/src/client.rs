//! Chat bot API HTTP client.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{BotInfo, FileInfo, GetUpdatesParams, SendMessageParams, SentMessage, Update};

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i32>,
}

/// Client for communicating with the chat bot API.
#[derive(Clone)]
pub struct ChatClient {
    http: Client,
    config: GatewayConfig,
    connected: Arc<AtomicBool>,
}

impl ChatClient {
    /// Connect to the bot API and verify the token.
    pub async fn connect(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .map_err(GatewayError::Http)?;

        let client = Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        };

        // Verify connection with a getMe health check
        let me = client.get_me().await.map_err(|e| {
            debug!("getMe failed during connect: {}", e);
            GatewayError::HealthCheckFailed
        })?;
        client.connected.store(true, Ordering::SeqCst);
        info!(
            "Connected to bot API at {} as {}",
            client.config.base_url,
            me.username.as_deref().unwrap_or("<unnamed>")
        );

        Ok(client)
    }

    /// Check if the last health check succeeded.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Get the bot's own identity.
    pub async fn get_me(&self) -> Result<BotInfo, GatewayError> {
        self.api_call::<(), _>("getMe", None).await
    }

    /// Send a text message to a chat.
    pub async fn send_text(&self, chat_id: i64, text: &str) -> Result<SentMessage, GatewayError> {
        let params = SendMessageParams::text(chat_id, text);
        self.send_message(params).await
    }

    /// Send a message using the full parameter structure.
    pub async fn send_message(
        &self,
        params: SendMessageParams,
    ) -> Result<SentMessage, GatewayError> {
        self.api_call("sendMessage", Some(params)).await
    }

    /// Send a photo from a local file to a chat.
    pub async fn send_photo(
        &self,
        chat_id: i64,
        image_path: &Path,
    ) -> Result<SentMessage, GatewayError> {
        let bytes = tokio::fs::read(image_path).await?;
        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.jpg".to_string());

        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("photo", Part::bytes(bytes).file_name(file_name));

        let url = self.config.method_url("sendPhoto");
        debug!("API call: sendPhoto (chat_id={})", chat_id);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(GatewayError::Http)?;

        Self::unwrap_response(response).await
    }

    /// Look up file metadata for a file identifier.
    pub async fn get_file(&self, file_id: &str) -> Result<FileInfo, GatewayError> {
        #[derive(Serialize)]
        struct GetFileParams<'a> {
            file_id: &'a str,
        }
        self.api_call("getFile", Some(GetFileParams { file_id }))
            .await
    }

    /// Download raw file contents by server-relative path.
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>, GatewayError> {
        let url = self.config.file_url(file_path);
        debug!("Downloading file: {}", file_path);

        let response = self.http.get(&url).send().await.map_err(GatewayError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Connection(format!(
                "file download failed: HTTP {}",
                status
            )));
        }

        Ok(response.bytes().await.map_err(GatewayError::Http)?.to_vec())
    }

    /// Resolve a file identifier and download its contents into `dest_dir`.
    ///
    /// Returns the local path of the downloaded file. The file name is taken
    /// from the server-reported path.
    pub async fn download_to(
        &self,
        file_id: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, GatewayError> {
        let file_info = self.get_file(file_id).await?;
        let file_path = file_info.file_path.ok_or_else(|| {
            GatewayError::Connection(format!("no file path for file id {}", file_id))
        })?;

        let bytes = self.download_file(&file_path).await?;

        let file_name = file_path.rsplit('/').next().unwrap_or(&file_path);
        let dest = dest_dir.join(file_name);
        tokio::fs::create_dir_all(dest_dir).await?;
        tokio::fs::write(&dest, &bytes).await?;

        debug!("Downloaded {} bytes to {}", bytes.len(), dest.display());
        Ok(dest)
    }

    /// Fetch a batch of updates via long polling.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, GatewayError> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout.as_secs(),
            limit: None,
        };
        self.api_call("getUpdates", Some(params)).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Make a JSON call to a bot API method.
    async fn api_call<P: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        params: Option<P>,
    ) -> Result<R, GatewayError> {
        let url = self.config.method_url(method);
        debug!("API call: {}", method);

        let mut request = self.http.post(&url);
        if let Some(ref params) = params {
            request = request.json(params);
        }

        let response = request.send().await.map_err(GatewayError::Http)?;
        Self::unwrap_response(response).await
    }

    /// Unwrap the `{ok, result, ...}` response envelope.
    async fn unwrap_response<R: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<R, GatewayError> {
        let status = response.status();
        let body = response.text().await.map_err(GatewayError::Http)?;

        let api_response: ApiResponse<R> = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                GatewayError::Json(e)
            } else {
                GatewayError::Connection(format!("HTTP {}: {}", status, body))
            }
        })?;

        if !api_response.ok {
            return Err(GatewayError::Api {
                code: api_response.error_code.unwrap_or(-1),
                description: api_response
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        api_response.result.ok_or_else(|| GatewayError::Api {
            code: -1,
            description: "No result in response".to_string(),
        })
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.config.base_url)
            .field("connected", &self.is_connected())
            .finish()
    }
}
