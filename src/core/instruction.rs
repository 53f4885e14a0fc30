//! Natural-language delivery directive composition.
//!
//! The backend accepts a free-form `instruct` field describing how the text
//! should be spoken. The directive is assembled from fixed tables, in order:
//!
//! 1. the base instruction
//! 2. the intensity tier directive
//! 3. one sentence per inferred style
//! 4. one secondary-cue sentence per known emotion marker
//!
//! Clauses are de-duplicated by exact text and joined with single spaces.

use std::fmt;

use crate::core::emotion::{IntensityLevel, amplify, emotion_clause};
use crate::core::style::{StyleSet, infer_styles};

/// Base instruction used when the configured one is blank.
pub const DEFAULT_BASE_INSTRUCTION: &str =
    "Speak naturally in a warm, conversational voice that matches the meaning of the text.";

/// The composed delivery directive.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionDirective {
    clauses: Vec<String>,
    styles: StyleSet,
    level: IntensityLevel,
}

impl InstructionDirective {
    fn push_unique(&mut self, clause: String) {
        if clause.is_empty() || self.clauses.contains(&clause) {
            return;
        }
        self.clauses.push(clause);
    }

    /// Individual clauses in directive order.
    #[inline]
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Styles inferred while composing.
    #[inline]
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Intensity tier used for the directive.
    #[inline]
    pub fn level(&self) -> IntensityLevel {
        self.level
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The joined directive, or `None` when there is nothing to send.
    pub fn as_instruct(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for InstructionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.join(" "))
    }
}

/// Composes the delivery directive for cleaned `text`.
///
/// `emotions` are the lowercase marker tags from the text normalizer;
/// `style_intensity` is expected to be already clamped (>= 1.0).
pub fn compose_instruction(
    text: &str,
    emotions: &[String],
    base_instruction: &str,
    style_intensity: f32,
) -> InstructionDirective {
    let level = IntensityLevel::from_f32(style_intensity);
    let styles = infer_styles(text);

    let mut directive = InstructionDirective {
        clauses: Vec::new(),
        styles,
        level,
    };

    directive.push_unique(base_instruction.trim().to_string());
    directive.push_unique(level.directive().to_string());

    let style_clauses: Vec<String> = directive
        .styles
        .iter()
        .map(|style| amplify(style.instruction(), style_intensity))
        .collect();
    for clause in style_clauses {
        directive.push_unique(clause);
    }

    for tag in emotions {
        if let Some(clause) = emotion_clause(tag, style_intensity) {
            directive.push_unique(clause);
        }
    }

    directive
}
