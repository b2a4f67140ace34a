//! Message classification into processing commands.

use image_filters::FilterKind;

use crate::config::ProcessingMode;
use crate::message::{InboundMessage, PhotoRef};

/// The action an inbound message maps to.
///
/// Classification is total: every message maps to exactly one variant,
/// including the explicitly unsupported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Plain text message; echoed back.
    PlainText(String),

    /// Photo without a caption in filter mode; acknowledged, not processed.
    NoCaption,

    /// Photo whose caption names a recognized filter.
    FilterCommand { photo: PhotoRef, kind: FilterKind },

    /// Photo with a caption that names no recognized filter (filter mode).
    UnknownCaption(String),

    /// Photo to run object detection on (detection mode).
    DetectionRequest { photo: PhotoRef },

    /// Message shape the relay cannot process (no text, no photo).
    Unsupported,
}

/// Classify an inbound message.
///
/// Pure and total: no I/O, no side effects, exactly one command per
/// message. Priority order: text-only first, then caption matching, then
/// the mode-dependent fallback for photos.
pub fn classify(msg: &InboundMessage, mode: ProcessingMode) -> Command {
    let Some(photo) = &msg.photo else {
        return match &msg.text {
            Some(text) => Command::PlainText(text.clone()),
            None => Command::Unsupported,
        };
    };

    match &msg.caption {
        Some(caption) => match FilterKind::parse(caption) {
            Some(kind) => Command::FilterCommand {
                photo: photo.clone(),
                kind,
            },
            None => match mode {
                // Detection deployments ignore unrecognized captions.
                ProcessingMode::Detection => Command::DetectionRequest {
                    photo: photo.clone(),
                },
                ProcessingMode::Filter => Command::UnknownCaption(caption.clone()),
            },
        },
        None => match mode {
            ProcessingMode::Detection => Command::DetectionRequest {
                photo: photo.clone(),
            },
            ProcessingMode::Filter => Command::NoCaption,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> PhotoRef {
        PhotoRef::new("file-1").with_file_name("cat.jpg")
    }

    #[test]
    fn test_text_classifies_in_both_modes() {
        let msg = InboundMessage::text(1, "hello");
        for mode in [ProcessingMode::Filter, ProcessingMode::Detection] {
            assert_eq!(
                classify(&msg, mode),
                Command::PlainText("hello".to_string())
            );
        }
    }

    #[test]
    fn test_empty_message_is_unsupported() {
        let msg = InboundMessage {
            chat_id: 1,
            text: None,
            photo: None,
            caption: None,
        };
        assert_eq!(classify(&msg, ProcessingMode::Filter), Command::Unsupported);
        assert_eq!(
            classify(&msg, ProcessingMode::Detection),
            Command::Unsupported
        );
    }

    #[test]
    fn test_caption_matching_is_case_and_whitespace_insensitive() {
        for caption in ["Blur", " blur ", "BLUR"] {
            let msg = InboundMessage::photo_with_caption(1, photo(), caption);
            assert_eq!(
                classify(&msg, ProcessingMode::Filter),
                Command::FilterCommand {
                    photo: photo(),
                    kind: FilterKind::Blur
                }
            );
        }
    }

    #[test]
    fn test_recognized_caption_wins_in_detection_mode() {
        let msg = InboundMessage::photo_with_caption(1, photo(), "rotate 2");
        assert_eq!(
            classify(&msg, ProcessingMode::Detection),
            Command::FilterCommand {
                photo: photo(),
                kind: FilterKind::RotateTwice
            }
        );
    }

    #[test]
    fn test_unknown_caption_by_mode() {
        let msg = InboundMessage::photo_with_caption(1, photo(), "sharpen");
        assert_eq!(
            classify(&msg, ProcessingMode::Filter),
            Command::UnknownCaption("sharpen".to_string())
        );
        assert_eq!(
            classify(&msg, ProcessingMode::Detection),
            Command::DetectionRequest { photo: photo() }
        );
    }

    #[test]
    fn test_uncaptioned_photo_by_mode() {
        let msg = InboundMessage::photo(1, photo());
        assert_eq!(classify(&msg, ProcessingMode::Filter), Command::NoCaption);
        assert_eq!(
            classify(&msg, ProcessingMode::Detection),
            Command::DetectionRequest { photo: photo() }
        );
    }

    #[test]
    fn test_photo_with_text_still_routes_by_photo() {
        // A message carrying both text and a photo is a photo message.
        let msg = InboundMessage {
            chat_id: 1,
            text: Some("hi".to_string()),
            photo: Some(photo()),
            caption: None,
        };
        assert_eq!(classify(&msg, ProcessingMode::Filter), Command::NoCaption);
    }
}
