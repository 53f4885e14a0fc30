//! Facial-expression tag to delivery sentence mapping.
//!
//! Emotion markers extracted from the text are treated as secondary cues: each
//! known tag contributes one natural-language sentence to the directive. Tags
//! with no entry are ignored.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::amplify;

/// Prefix for every emotion clause in the directive.
const SECONDARY_CUE_PREFIX: &str = "Secondary cue from facial expression tag";

/// Lowercase emotion tag -> delivery sentence.
static EMOTION_INSTRUCTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        // Canonical expression set
        m.insert("neutral", "Keep the underlying feeling even and composed.");
        m.insert("joy", "Let a bright, genuinely happy smile come through the voice.");
        m.insert("sadness", "Let a soft, downcast sadness color the voice, slightly slower.");
        m.insert("anger", "Let controlled irritation sharpen the voice with firmer emphasis.");
        m.insert("surprise", "Let a lifted, astonished pitch show genuine surprise.");
        m.insert("fear", "Let a tense, slightly shaky breathiness convey unease.");
        m.insert("disgust", "Let a wry, recoiling distaste edge into the voice.");
        m.insert("smirk", "Let a sly, knowing amusement tint the delivery.");
        m.insert("shy", "Let a bashful, slightly hesitant softness shape the voice.");

        // Common aliases
        m.insert("happy", "Let a bright, genuinely happy smile come through the voice.");
        m.insert("sad", "Let a soft, downcast sadness color the voice, slightly slower.");
        m.insert("angry", "Let controlled irritation sharpen the voice with firmer emphasis.");
        m.insert("surprised", "Let a lifted, astonished pitch show genuine surprise.");
        m.insert("scared", "Let a tense, slightly shaky breathiness convey unease.");

        m
    });

/// Returns the delivery sentence for an emotion tag, if the tag is known.
///
/// Lookup is exact on the lowercase tag, which is how the text normalizer
/// emits them.
#[inline]
pub fn emotion_instruction(tag: &str) -> Option<&'static str> {
    EMOTION_INSTRUCTIONS.get(tag).copied()
}

/// Returns whether `tag` has a table entry.
#[inline]
pub fn is_known_emotion(tag: &str) -> bool {
    EMOTION_INSTRUCTIONS.contains_key(tag)
}

/// Builds the full directive clause for an emotion tag at `intensity`.
///
/// Returns `None` for unknown tags.
pub fn emotion_clause(tag: &str, intensity: f32) -> Option<String> {
    let sentence = emotion_instruction(tag)?;
    Some(format!(
        "{SECONDARY_CUE_PREFIX} '{tag}': {}",
        amplify(sentence, intensity)
    ))
}

/// All tags with a table entry, sorted.
pub fn known_emotions() -> Vec<&'static str> {
    let mut tags: Vec<_> = EMOTION_INSTRUCTIONS.keys().copied().collect();
    tags.sort_unstable();
    tags
}
