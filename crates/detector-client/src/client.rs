//! Detection service HTTP client.

use reqwest::Client;
use tracing::debug;

use crate::error::DetectorError;
use crate::types::Prediction;

/// Configuration for the detection service client.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Base URL of the detection service (e.g., "http://localhost:8081").
    pub base_url: String,
}

impl DetectorConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Get the predict endpoint URL.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

/// Client for the object detection service.
///
/// `predict` is a synchronous remote call that runs model inference on the
/// service side; expect non-trivial wall-clock time. The client itself sets
/// no request timeout — callers own the deadline.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    http: Client,
    config: DetectorConfig,
}

impl DetectorClient {
    /// Create a new detector client.
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        let http = Client::builder().build().map_err(DetectorError::Http)?;
        Ok(Self { http, config })
    }

    /// Run object detection against an image already staged in the store.
    ///
    /// `img_name` is the object store key of the source image. On success
    /// the returned record carries the request id, annotated image key, and
    /// the (possibly empty) label list.
    pub async fn predict(&self, img_name: &str) -> Result<Prediction, DetectorError> {
        let url = self.config.predict_url();
        debug!("POST {} (imgName={})", url, img_name);

        let response = self
            .http
            .post(&url)
            .query(&[("imgName", img_name)])
            .send()
            .await
            .map_err(DetectorError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(DetectorError::Http)?;

        if status.as_u16() == 404 {
            return Err(DetectorError::SourceNotFound {
                key: img_name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DetectorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let prediction: Prediction = serde_json::from_str(&body)?;
        debug!(
            "Prediction {} finished with {} labels",
            prediction.prediction_id,
            prediction.labels.len()
        );
        Ok(prediction)
    }

    /// Get the configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}
