//! Detection orchestrator: acquire → stage → infer → retrieve → reply.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use blob_store::BlobStore;
use prediction_store::{prediction, PredictionRecord, PredictionStore};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::RelayError;
use crate::fetcher::PhotoFetcher;
use crate::infer::Detector;
use crate::message::PhotoRef;
use crate::sender::ReplySender;
use crate::summary::summarize_labels;

/// Compose the object store key a photo is staged under.
///
/// Unique per processing attempt: the chat id keeps one chat's uploads
/// apart, the random suffix keeps concurrent requests apart — including a
/// second request from the same chat while the first is in flight.
pub fn staged_key(chat_id: i64, file_name: &str) -> String {
    format!("uploads/{}/{}_{}", chat_id, Uuid::new_v4().simple(), file_name)
}

/// Result of one completed detection flow.
#[derive(Debug, Clone)]
pub struct DetectionReply {
    /// Request id assigned by the detection service.
    pub request_id: String,
    /// Key the source photo was staged under.
    pub staged_key: String,
    /// The text summary sent to the chat.
    pub summary: String,
    /// Whether the annotated photo was retrieved and delivered.
    pub annotated_sent: bool,
}

/// Drives the five-step "upload → infer → download → summarize → reply"
/// sequence against the leaf collaborators.
///
/// Steps within one message are strictly sequential; the orchestrator
/// performs no automatic retries. A failure in steps 1-3 is terminal for
/// the attempt. Step 4 (annotated image retrieval) degrades the reply
/// instead of aborting: the label summary is still sent.
pub struct DetectionOrchestrator {
    fetcher: Arc<dyn PhotoFetcher>,
    store: Arc<dyn BlobStore>,
    detector: Arc<dyn Detector>,
    sender: Arc<dyn ReplySender>,
    predictions: Option<PredictionStore>,
    predict_deadline: Duration,
    work_dir: PathBuf,
}

impl DetectionOrchestrator {
    /// Create a new detection orchestrator.
    pub fn new(
        fetcher: Arc<dyn PhotoFetcher>,
        store: Arc<dyn BlobStore>,
        detector: Arc<dyn Detector>,
        sender: Arc<dyn ReplySender>,
        predict_deadline: Duration,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            store,
            detector,
            sender,
            predictions: None,
            predict_deadline,
            work_dir: work_dir.into(),
        }
    }

    /// Persist finished prediction records to the given store.
    ///
    /// Persistence failures are logged and never affect the reply.
    pub fn with_prediction_store(mut self, store: PredictionStore) -> Self {
        self.predictions = Some(store);
        self
    }

    /// Run the full detection flow for one photo message.
    pub async fn run(
        &self,
        photo: &PhotoRef,
        chat_id: i64,
    ) -> Result<DetectionReply, RelayError> {
        let request_dir = self.work_dir.join(Uuid::new_v4().simple().to_string());

        // 1. Acquire the photo bytes locally.
        let local = self.fetcher.fetch(photo, &request_dir).await?;
        let bytes = tokio::fs::read(&local)
            .await
            .map_err(|e| RelayError::Acquire(format!("{}: {}", local.display(), e)))?;
        debug!("Acquired {} bytes for chat {}", bytes.len(), chat_id);

        // 2. Stage into the object store under a request-unique key.
        let key = staged_key(chat_id, photo.file_name_or_default());
        self.store
            .put(&key, &bytes)
            .await
            .map_err(RelayError::Stage)?;
        debug!("Staged photo for chat {} under {}", chat_id, key);

        // 3. Infer, bounded by the configured deadline.
        let prediction = match timeout(self.predict_deadline, self.detector.predict(&key)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(RelayError::InferenceTimeout {
                    deadline: self.predict_deadline,
                })
            }
        };
        info!(
            "Prediction {} finished for chat {} with {} labels",
            prediction.prediction_id,
            chat_id,
            prediction.labels.len()
        );

        self.persist(&prediction, chat_id, &key).await;

        // 4. Retrieve the annotated image. Failure here degrades the reply;
        //    the summary below is still sent.
        let annotated_sent = self.send_annotated(&prediction, chat_id, &key, &request_dir).await;

        // 5. Summarize and reply.
        let summary = summarize_labels(&prediction.labels);
        self.sender.send_text(chat_id, &summary).await?;

        Ok(DetectionReply {
            request_id: prediction.prediction_id,
            staged_key: key,
            summary,
            annotated_sent,
        })
    }

    /// Record the finished prediction, when a store is configured.
    async fn persist(&self, prediction: &detector_client::Prediction, chat_id: i64, key: &str) {
        let Some(store) = &self.predictions else {
            return;
        };

        let record = match PredictionRecord::from_prediction(prediction, chat_id, key) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to encode prediction record for chat {}: {}", chat_id, e);
                return;
            }
        };

        if let Err(e) = prediction::insert_prediction(store.pool(), &record).await {
            warn!(
                "Failed to persist prediction {} for chat {}: {}",
                prediction.prediction_id, chat_id, e
            );
        }
    }

    /// Fetch the annotated image and send it; true on delivered.
    async fn send_annotated(
        &self,
        prediction: &detector_client::Prediction,
        chat_id: i64,
        source_key: &str,
        request_dir: &std::path::Path,
    ) -> bool {
        let annotated_key = prediction.annotated_key(source_key);

        let bytes = match self.store.get(&annotated_key).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Annotated image retrieval failed for prediction {} (chat {}, key {}): {}",
                    prediction.prediction_id,
                    chat_id,
                    annotated_key,
                    RelayError::Retrieve(e)
                );
                return false;
            }
        };

        let file_name = annotated_key.rsplit('/').next().unwrap_or("annotated.jpg");
        let path = request_dir.join(format!("annotated_{}", file_name));
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            warn!("Failed to write annotated image for chat {}: {}", chat_id, e);
            return false;
        }

        match self.sender.send_photo(chat_id, &path).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Annotated photo delivery failed for prediction {} (chat {}): {}",
                    prediction.prediction_id, chat_id, e
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_staged_keys_are_unique_per_attempt() {
        let mut keys = HashSet::new();
        for _ in 0..100 {
            assert!(keys.insert(staged_key(42, "photo.jpg")));
        }
    }

    #[test]
    fn test_staged_keys_distinct_across_chats() {
        let a = staged_key(7, "photo.jpg");
        let b = staged_key(8, "photo.jpg");
        assert_ne!(a, b);
        assert!(a.starts_with("uploads/7/"));
        assert!(b.starts_with("uploads/8/"));
    }

    #[test]
    fn test_staged_key_keeps_file_name() {
        let key = staged_key(42, "cat.jpg");
        assert!(key.ends_with("_cat.jpg"));
    }
}
