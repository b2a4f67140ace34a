//! Prediction record types returned by the detection service.

use serde::{Deserialize, Serialize};

/// One detected object, with a bounding box in normalized coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Detected class name (e.g., "person").
    pub class: String,

    /// Box center x, normalized to [0, 1].
    pub cx: f64,

    /// Box center y, normalized to [0, 1].
    pub cy: f64,

    /// Box width, normalized to [0, 1].
    pub width: f64,

    /// Box height, normalized to [0, 1].
    pub height: f64,
}

/// A finished prediction record.
///
/// An empty `labels` list is a successful prediction with zero detections,
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Unique identifier generated by the service for this request.
    pub prediction_id: String,

    /// Key of the source image the prediction ran against.
    #[serde(default)]
    pub original_img_path: String,

    /// Key of the annotated image, as reported by the service.
    #[serde(default)]
    pub predicted_img_path: Option<String>,

    /// Detected objects, in model output order.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Completion timestamp (seconds since epoch).
    #[serde(default)]
    pub time: f64,
}

impl Prediction {
    /// The object store key of the annotated image.
    ///
    /// Prefers the service-reported key; falls back to composing the
    /// `predictions/{prediction_id}_{source}` convention from `source_key`.
    pub fn annotated_key(&self, source_key: &str) -> String {
        match &self.predicted_img_path {
            Some(key) if !key.is_empty() => key.clone(),
            _ => annotated_key(&self.prediction_id, source_key),
        }
    }
}

/// Compose the conventional annotated-image key for a prediction.
///
/// The detection service uploads its annotated output under
/// `predictions/{request_id}_{original_name}`; this format must match the
/// service exactly.
pub fn annotated_key(request_id: &str, original_name: &str) -> String {
    format!("predictions/{}_{}", request_id, original_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_key_convention() {
        assert_eq!(
            annotated_key("abc-123", "uploads/42/photo.jpg"),
            "predictions/abc-123_uploads/42/photo.jpg"
        );
    }

    #[test]
    fn test_prediction_prefers_reported_key() {
        let prediction = Prediction {
            prediction_id: "abc".to_string(),
            original_img_path: "img.jpg".to_string(),
            predicted_img_path: Some("predictions/abc_img.jpg".to_string()),
            labels: vec![],
            time: 0.0,
        };
        assert_eq!(prediction.annotated_key("img.jpg"), "predictions/abc_img.jpg");
    }

    #[test]
    fn test_prediction_falls_back_to_convention() {
        let prediction = Prediction {
            prediction_id: "abc".to_string(),
            original_img_path: "img.jpg".to_string(),
            predicted_img_path: None,
            labels: vec![],
            time: 0.0,
        };
        assert_eq!(prediction.annotated_key("img.jpg"), "predictions/abc_img.jpg");
    }

    #[test]
    fn test_parse_prediction_response() {
        let json = r#"{
            "prediction_id": "5f6c",
            "original_img_path": "uploads/7/cat.jpg",
            "predicted_img_path": "predictions/5f6c_uploads/7/cat.jpg",
            "labels": [
                {"class": "cat", "cx": 0.5, "cy": 0.5, "width": 0.25, "height": 0.25}
            ],
            "time": 1700000000.0
        }"#;

        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.labels.len(), 1);
        assert_eq!(prediction.labels[0].class, "cat");
    }

    #[test]
    fn test_parse_empty_labels() {
        let json = r#"{"prediction_id": "x", "labels": []}"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert!(prediction.labels.is_empty());
    }
}
