//! Rule-based delivery style inference.
//!
//! Styles are inferred from the cleaned text only (emotion markers are already
//! stripped). The result is an ordered [`StyleSet`] of at most
//! [`MAX_ACTIVE_STYLES`] tags: rule-table order first, then the punctuation
//! heuristics, defaulting to [`StyleTag::Calm`] when nothing fires.

pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use rules::{STYLE_RULES, StyleRule};

/// Maximum number of simultaneously active style tags.
pub const MAX_ACTIVE_STYLES: usize = 3;

/// Exclamation marks needed before urgency is inferred from punctuation.
const URGENT_EXCLAMATION_COUNT: usize = 2;

// =============================================================================
// Style Tag
// =============================================================================

/// Delivery style categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    Apology,
    Gratitude,
    Celebration,
    Comfort,
    Teasing,
    Romantic,
    Whisper,
    Authority,
    Urgency,
    Curious,
    Storytelling,
    Instructional,
    Humor,
    /// Default when no rule or heuristic fires.
    Calm,
}

impl StyleTag {
    /// Convert to the lowercase tag name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apology => "apology",
            Self::Gratitude => "gratitude",
            Self::Celebration => "celebration",
            Self::Comfort => "comfort",
            Self::Teasing => "teasing",
            Self::Romantic => "romantic",
            Self::Whisper => "whisper",
            Self::Authority => "authority",
            Self::Urgency => "urgency",
            Self::Curious => "curious",
            Self::Storytelling => "storytelling",
            Self::Instructional => "instructional",
            Self::Humor => "humor",
            Self::Calm => "calm",
        }
    }

    /// Parse a tag name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "apology" => Some(Self::Apology),
            "gratitude" => Some(Self::Gratitude),
            "celebration" => Some(Self::Celebration),
            "comfort" => Some(Self::Comfort),
            "teasing" => Some(Self::Teasing),
            "romantic" => Some(Self::Romantic),
            "whisper" => Some(Self::Whisper),
            "authority" => Some(Self::Authority),
            "urgency" => Some(Self::Urgency),
            "curious" => Some(Self::Curious),
            "storytelling" => Some(Self::Storytelling),
            "instructional" => Some(Self::Instructional),
            "humor" => Some(Self::Humor),
            "calm" => Some(Self::Calm),
            _ => None,
        }
    }

    /// Delivery sentence sent to the backend for this style.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Apology => "Sound sincerely apologetic, gentle and humble.",
            Self::Gratitude => "Sound warmly grateful and appreciative.",
            Self::Celebration => "Sound celebratory and upbeat, bursting with bright energy.",
            Self::Comfort => "Sound soothing and reassuring, with a soft, caring warmth.",
            Self::Teasing => "Sound playful and teasing, with a light mischievous lilt.",
            Self::Romantic => "Sound tender and affectionate, intimate and warm.",
            Self::Whisper => "Speak in a hushed, breathy whisper, close and quiet.",
            Self::Authority => "Sound firm, confident and authoritative.",
            Self::Urgency => "Sound urgent and pressing, with a quicker pace.",
            Self::Curious => "Sound curious and inquisitive, letting questions rise at the end.",
            Self::Storytelling => "Use an engaging storytelling cadence with expressive pauses.",
            Self::Instructional => "Sound clear and methodical, like walking a learner through steps.",
            Self::Humor => "Sound amused and lighthearted, with a laugh sitting just under the words.",
            Self::Calm => "Keep the delivery calm, even and relaxed.",
        }
    }

    /// Tags produced by the rule table, in evaluation order.
    pub fn rule_order() -> Vec<StyleTag> {
        vec![
            Self::Apology,
            Self::Gratitude,
            Self::Celebration,
            Self::Comfort,
            Self::Teasing,
            Self::Romantic,
            Self::Whisper,
            Self::Authority,
            Self::Urgency,
            Self::Curious,
            Self::Storytelling,
            Self::Instructional,
            Self::Humor,
        ]
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Style Set
// =============================================================================

/// Ordered, de-duplicated, size-bounded set of inferred styles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSet {
    tags: Vec<StyleTag>,
}

impl StyleSet {
    /// Appends `tag` unless it is already present.
    fn insert(&mut self, tag: StyleTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    #[inline]
    pub fn contains(&self, tag: StyleTag) -> bool {
        self.tags.contains(&tag)
    }

    #[inline]
    pub fn tags(&self) -> &[StyleTag] {
        &self.tags
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleTag> {
        self.tags.iter()
    }

    /// Tag names, for logging and previews.
    pub fn names(&self) -> Vec<&'static str> {
        self.tags.iter().map(StyleTag::as_str).collect()
    }
}

// =============================================================================
// Inference
// =============================================================================

/// Infers the delivery styles for cleaned `text`.
///
/// Deterministic: identical input always yields an identical, order-stable set.
pub fn infer_styles(text: &str) -> StyleSet {
    let mut styles = StyleSet::default();

    for rule in STYLE_RULES.iter() {
        if rule.matches(text) {
            styles.insert(rule.tag);
        }
    }

    let exclamations = text.chars().filter(|c| matches!(c, '!' | '！')).count();
    if exclamations >= URGENT_EXCLAMATION_COUNT {
        styles.insert(StyleTag::Urgency);
    }

    if text.chars().any(|c| matches!(c, '?' | '？')) {
        styles.insert(StyleTag::Curious);
    }

    if styles.is_empty() {
        styles.insert(StyleTag::Calm);
    }

    styles.tags.truncate(MAX_ACTIVE_STYLES);
    styles
}
