//! Style intensity types.
//!
//! The engine carries a single `style_intensity` multiplier (always >= 1.0).
//! It selects one of four intensity directives and decides how strongly each
//! style or emotion sentence is emphasised.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted style intensity; smaller values are clamped up to it.
pub const MIN_STYLE_INTENSITY: f32 = 1.0;

/// Intensity at or above which sentences get the strong emphasis suffix.
const STRONG_EMPHASIS_THRESHOLD: f32 = 1.8;

/// Intensity at or above which sentences get the mild emphasis suffix.
const MILD_EMPHASIS_THRESHOLD: f32 = 1.4;

const STRONG_EMPHASIS_SUFFIX: &str =
    "Make this feeling unmistakable and strongly pronounced.";

const MILD_EMPHASIS_SUFFIX: &str = "Make this feeling clearly noticeable.";

// =============================================================================
// Intensity Level
// =============================================================================

/// Intensity tier selected from the numeric style intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum IntensityLevel {
    /// Below 1.3
    #[default]
    Normal,
    /// 1.3 up to 1.6
    MediumHigh,
    /// 1.6 up to 2.0
    High,
    /// 2.0 and above
    Max,
}

impl IntensityLevel {
    /// Selects the tier for a style intensity value.
    pub fn from_f32(value: f32) -> Self {
        if value >= 2.0 {
            IntensityLevel::Max
        } else if value >= 1.6 {
            IntensityLevel::High
        } else if value >= 1.3 {
            IntensityLevel::MediumHigh
        } else {
            IntensityLevel::Normal
        }
    }

    /// Tier label as it appears in the directive.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Normal => "NORMAL",
            IntensityLevel::MediumHigh => "MEDIUM-HIGH",
            IntensityLevel::High => "HIGH",
            IntensityLevel::Max => "MAX",
        }
    }

    /// The fixed directive sentence for this tier.
    pub const fn directive(&self) -> &'static str {
        match self {
            IntensityLevel::Max => {
                "Intensity MAX: deliver with maximum expressiveness, bold dynamic range and vivid emotional color."
            }
            IntensityLevel::High => {
                "Intensity HIGH: deliver with strong expressiveness and clearly varied pitch and pacing."
            }
            IntensityLevel::MediumHigh => {
                "Intensity MEDIUM-HIGH: deliver with noticeably lively expressiveness while staying natural."
            }
            IntensityLevel::Normal => {
                "Intensity NORMAL: deliver with natural, moderate expressiveness."
            }
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamps a configured style intensity to the accepted range.
///
/// Non-finite values fall back to the minimum.
#[inline]
pub fn clamp_style_intensity(value: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_STYLE_INTENSITY)
    } else {
        MIN_STYLE_INTENSITY
    }
}

/// Appends the emphasis suffix matching `intensity` to a sentence.
pub fn amplify(sentence: &str, intensity: f32) -> String {
    if intensity >= STRONG_EMPHASIS_THRESHOLD {
        format!("{sentence} {STRONG_EMPHASIS_SUFFIX}")
    } else if intensity >= MILD_EMPHASIS_THRESHOLD {
        format!("{sentence} {MILD_EMPHASIS_SUFFIX}")
    } else {
        sentence.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(IntensityLevel::from_f32(1.0), IntensityLevel::Normal);
        assert_eq!(IntensityLevel::from_f32(1.29), IntensityLevel::Normal);
        assert_eq!(IntensityLevel::from_f32(1.3), IntensityLevel::MediumHigh);
        assert_eq!(IntensityLevel::from_f32(1.59), IntensityLevel::MediumHigh);
        assert_eq!(IntensityLevel::from_f32(1.6), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_f32(1.99), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_f32(2.0), IntensityLevel::Max);
        assert_eq!(IntensityLevel::from_f32(7.5), IntensityLevel::Max);
    }

    #[test]
    fn test_directive_names_its_tier() {
        for level in [
            IntensityLevel::Normal,
            IntensityLevel::MediumHigh,
            IntensityLevel::High,
            IntensityLevel::Max,
        ] {
            assert!(level.directive().contains(level.as_str()));
        }
    }

    #[test]
    fn test_clamp_style_intensity() {
        assert_eq!(clamp_style_intensity(0.5), 1.0);
        assert_eq!(clamp_style_intensity(-3.0), 1.0);
        assert_eq!(clamp_style_intensity(1.7), 1.7);
        assert_eq!(clamp_style_intensity(f32::NAN), 1.0);
        assert_eq!(clamp_style_intensity(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_amplify_bands() {
        let base = "Sound warm.";
        assert_eq!(amplify(base, 1.0), "Sound warm.");
        assert_eq!(amplify(base, 1.39), "Sound warm.");
        assert_eq!(
            amplify(base, 1.4),
            "Sound warm. Make this feeling clearly noticeable."
        );
        assert_eq!(
            amplify(base, 1.8),
            "Sound warm. Make this feeling unmistakable and strongly pronounced."
        );
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&IntensityLevel::MediumHigh).unwrap();
        assert_eq!(json, "\"MEDIUM-HIGH\"");
    }
}
