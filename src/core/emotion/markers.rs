//! Inline emotion marker extraction.
//!
//! Conversational text may carry facial-expression annotations of the form
//! `<<emo:NAME>>`. The markers are metadata for the delivery directive and must
//! never reach the synthesis backend, so they are stripped here and returned as
//! a separate ordered list.

use std::sync::LazyLock;

use regex::Regex;

/// `<<emo:NAME>>` where NAME is an identifier.
static EMOTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<<emo:([A-Za-z_][A-Za-z0-9_]*)>>").expect("valid regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Text with emotion markers removed, plus the markers that were found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    /// Cleaned text: markers removed, whitespace collapsed, trimmed.
    pub text: String,
    /// Lowercased marker names in order of appearance (duplicates kept).
    pub emotions: Vec<String>,
}

impl NormalizedText {
    /// Returns whether any emotion marker was present.
    #[inline]
    pub fn has_emotions(&self) -> bool {
        !self.emotions.is_empty()
    }
}

/// Strips every `<<emo:NAME>>` marker from `raw` and collects the names.
///
/// Text without markers is only trimmed; its inner whitespace is left alone.
/// Malformed markers (e.g. `<<emo:9x>>` or `<<emo: joy>>`) are not markers and
/// stay in the text untouched.
pub fn normalize_text(raw: &str) -> NormalizedText {
    let emotions = EMOTION_MARKER
        .captures_iter(raw)
        .map(|caps| caps[1].to_lowercase())
        .collect::<Vec<_>>();

    if emotions.is_empty() {
        return NormalizedText {
            text: raw.trim().to_string(),
            emotions,
        };
    }

    let stripped = EMOTION_MARKER.replace_all(raw, "");
    let text = WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string();

    NormalizedText { text, emotions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker() {
        let normalized = normalize_text("Hello <<emo:joy>> there");
        assert_eq!(normalized.text, "Hello there");
        assert_eq!(normalized.emotions, vec!["joy".to_string()]);
        assert!(normalized.has_emotions());
    }

    #[test]
    fn test_no_markers_returns_trimmed_text() {
        let normalized = normalize_text("  plain sentence, nothing else.  ");
        assert_eq!(normalized.text, "plain sentence, nothing else.");
        assert!(normalized.emotions.is_empty());
    }

    #[test]
    fn test_markers_lowercased_in_order_with_duplicates() {
        let normalized = normalize_text("<<emo:Joy>>Hi<<emo:SURPRISE>> you <<emo:joy>>");
        assert_eq!(normalized.text, "Hi you");
        assert_eq!(normalized.emotions, vec!["joy", "surprise", "joy"]);
    }

    #[test]
    fn test_marker_removed_without_padding() {
        let normalized = normalize_text("wait<<emo:fear>>what");
        assert_eq!(normalized.text, "waitwhat");
    }

    #[test]
    fn test_malformed_markers_are_kept() {
        let normalized = normalize_text("a <<emo:9lives>> b <<emo: joy>> c");
        assert_eq!(normalized.text, "a <<emo:9lives>> b <<emo: joy>> c");
        assert!(normalized.emotions.is_empty());
    }

    #[test]
    fn test_no_markers_keeps_inner_whitespace() {
        let normalized = normalize_text(" line one\n\nline two ");
        assert_eq!(normalized.text, "line one\n\nline two");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let normalized = normalize_text("one\n\n two\t\tthree <<emo:neutral>>   ");
        assert_eq!(normalized.text, "one two three");
        assert_eq!(normalized.emotions, vec!["neutral"]);
    }

    #[test]
    fn test_marker_only_input() {
        let normalized = normalize_text("<<emo:sadness>>");
        assert_eq!(normalized.text, "");
        assert_eq!(normalized.emotions, vec!["sadness"]);
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        let normalized = normalize_text("오늘 meeting은 <<emo:smirk>> 3pm입니다.");
        assert_eq!(normalized.text, "오늘 meeting은 3pm입니다.");
        assert_eq!(normalized.emotions, vec!["smirk"]);
    }
}
