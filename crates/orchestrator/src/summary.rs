//! Label summary formatting.

use detector_client::Label;

/// Reply sent when a prediction finishes with zero labels.
pub const NO_OBJECTS_REPLY: &str = "no objects detected";

/// Aggregate labels into a per-class count summary.
///
/// One `class: count` line per distinct class, in first-seen order of the
/// label sequence. Zero labels yields the explicit no-objects reply, never
/// an empty message.
pub fn summarize_labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return NO_OBJECTS_REPLY.to_string();
    }

    // First-seen order matters; a Vec scan keeps it without extra deps.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(class, _)| *class == label.class) {
            Some((_, count)) => *count += 1,
            None => counts.push((&label.class, 1)),
        }
    }

    counts
        .iter()
        .map(|(class, count)| format!("{}: {}", class, count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(class: &str) -> Label {
        Label {
            class: class.to_string(),
            cx: 0.5,
            cy: 0.5,
            width: 0.1,
            height: 0.1,
        }
    }

    #[test]
    fn test_summary_counts_in_first_seen_order() {
        let labels = vec![label("cat"), label("dog"), label("cat")];
        assert_eq!(summarize_labels(&labels), "cat: 2\ndog: 1");
    }

    #[test]
    fn test_summary_single_class() {
        let labels = vec![label("person")];
        assert_eq!(summarize_labels(&labels), "person: 1");
    }

    #[test]
    fn test_summary_empty_is_explicit() {
        assert_eq!(summarize_labels(&[]), NO_OBJECTS_REPLY);
    }

    #[test]
    fn test_summary_keeps_later_first_seen_classes_ordered() {
        let labels = vec![
            label("dog"),
            label("cat"),
            label("dog"),
            label("bird"),
            label("cat"),
        ];
        assert_eq!(summarize_labels(&labels), "dog: 2\ncat: 2\nbird: 1");
    }
}
