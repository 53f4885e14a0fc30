//! Emotion cues for speech delivery.
//!
//! Conversational text can carry inline facial-expression annotations such as
//! `<<emo:joy>>`. This module strips them from the text and turns the known
//! ones into natural-language delivery sentences for the instruction directive.
//!
//! ```text
//!  "Hello <<emo:joy>> there"
//!            │
//!            ▼  markers::normalize_text
//!  NormalizedText { text: "Hello there", emotions: ["joy"] }
//!                                              │
//!                                              ▼  mapper::emotion_clause
//!  "Secondary cue from facial expression tag 'joy': Let a bright, ..."
//! ```
//!
//! - [`markers`] - marker extraction
//! - [`mapper`] - emotion tag lookup table
//! - [`types`] - style intensity tiers and emphasis

pub mod mapper;
pub mod markers;
pub mod types;

pub use mapper::{emotion_clause, emotion_instruction, is_known_emotion, known_emotions};
pub use markers::{NormalizedText, normalize_text};
pub use types::{IntensityLevel, MIN_STYLE_INTENSITY, amplify, clamp_style_intensity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_to_clause_flow() {
        let normalized = normalize_text("Hello <<emo:joy>> there <<emo:unknown_tag>>");
        assert_eq!(normalized.text, "Hello there");

        let clauses: Vec<String> = normalized
            .emotions
            .iter()
            .filter_map(|tag| emotion_clause(tag, 1.0))
            .collect();

        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].contains("'joy'"));
    }
}
