//! Prediction store models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use detector_client::{Label, Prediction};

/// A persisted detection record.
///
/// Labels are stored as a JSON array in the `labels` column; use
/// [`PredictionRecord::labels`] to decode them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PredictionRecord {
    /// Request id generated by the detection service.
    pub prediction_id: String,
    /// Chat the request originated from.
    pub chat_id: i64,
    /// Object store key of the source image.
    pub source_key: String,
    /// Object store key of the annotated image.
    pub annotated_key: String,
    /// Detected labels, JSON-encoded.
    pub labels_json: String,
    /// Completion timestamp (seconds since epoch).
    pub finished_at: f64,
}

impl PredictionRecord {
    /// Build a record from a finished prediction.
    pub fn from_prediction(
        prediction: &Prediction,
        chat_id: i64,
        source_key: &str,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            prediction_id: prediction.prediction_id.clone(),
            chat_id,
            source_key: source_key.to_string(),
            annotated_key: prediction.annotated_key(source_key),
            labels_json: serde_json::to_string(&prediction.labels)?,
            finished_at: prediction.time,
        })
    }

    /// Decode the stored label list.
    pub fn labels(&self) -> serde_json::Result<Vec<Label>> {
        serde_json::from_str(&self.labels_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prediction_round_trip() {
        let prediction = Prediction {
            prediction_id: "abc".to_string(),
            original_img_path: "uploads/7/cat.jpg".to_string(),
            predicted_img_path: None,
            labels: vec![Label {
                class: "cat".to_string(),
                cx: 0.5,
                cy: 0.5,
                width: 0.2,
                height: 0.3,
            }],
            time: 1700000000.0,
        };

        let record =
            PredictionRecord::from_prediction(&prediction, 7, "uploads/7/cat.jpg").unwrap();
        assert_eq!(record.annotated_key, "predictions/abc_uploads/7/cat.jpg");

        let labels = record.labels().unwrap();
        assert_eq!(labels, prediction.labels);
    }
}
