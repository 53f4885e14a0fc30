//! Configuration types for the Qwen3 TTS backend.
//!
//! This module contains:
//! - Language canonicalization (display-cased names the backend expects)
//! - Voice canonicalization over the CustomVoice speaker set
//! - [`EngineConfig`], the resolved, immutable engine configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::TTSSettings;
use crate::core::emotion::clamp_style_intensity;
use crate::core::instruction::DEFAULT_BASE_INSTRUCTION;
use crate::core::tts::error::{TTSError, TTSResult};

/// Per-attempt timeout used when the configured one is unusable.
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Language token sent when none is configured.
pub const AUTO_LANGUAGE: &str = "Auto";

// =============================================================================
// Languages
// =============================================================================

/// Languages with a canonical backend name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qwen3Language {
    Auto,
    Chinese,
    English,
    Japanese,
    Korean,
    German,
    French,
    Russian,
    Portuguese,
    Spanish,
    Italian,
}

impl Qwen3Language {
    pub const ALL: [Qwen3Language; 11] = [
        Self::Auto,
        Self::Chinese,
        Self::English,
        Self::Japanese,
        Self::Korean,
        Self::German,
        Self::French,
        Self::Russian,
        Self::Portuguese,
        Self::Spanish,
        Self::Italian,
    ];

    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => AUTO_LANGUAGE,
            Self::Chinese => "Chinese",
            Self::English => "English",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::German => "German",
            Self::French => "French",
            Self::Russian => "Russian",
            Self::Portuguese => "Portuguese",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
        }
    }

    /// Parse a lowercase name or ISO 639-1 code.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "chinese" | "zh" => Some(Self::Chinese),
            "english" | "en" => Some(Self::English),
            "japanese" | "ja" => Some(Self::Japanese),
            "korean" | "ko" => Some(Self::Korean),
            "german" | "de" => Some(Self::German),
            "french" | "fr" => Some(Self::French),
            "russian" | "ru" => Some(Self::Russian),
            "portuguese" | "pt" => Some(Self::Portuguese),
            "spanish" | "es" => Some(Self::Spanish),
            "italian" | "it" => Some(Self::Italian),
            _ => None,
        }
    }
}

impl std::fmt::Display for Qwen3Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical language name for the payload.
///
/// Blank input maps to `Auto`. Unknown values pass through as given.
pub fn canonical_language(input: &str) -> String {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        return AUTO_LANGUAGE.to_string();
    }
    match Qwen3Language::from_str(&key) {
        Some(language) => language.as_str().to_string(),
        None => input.to_string(),
    }
}

// =============================================================================
// Voices
// =============================================================================

/// Qwen3 CustomVoice speakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qwen3Voice {
    Vivian,
    Serena,
    UncleFu,
    Dylan,
    Eric,
    Ryan,
    Aiden,
    OnoAnna,
    Sohee,
}

impl Qwen3Voice {
    pub const ALL: [Qwen3Voice; 9] = [
        Self::Vivian,
        Self::Serena,
        Self::UncleFu,
        Self::Dylan,
        Self::Eric,
        Self::Ryan,
        Self::Aiden,
        Self::OnoAnna,
        Self::Sohee,
    ];

    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vivian => "Vivian",
            Self::Serena => "Serena",
            Self::UncleFu => "Uncle_Fu",
            Self::Dylan => "Dylan",
            Self::Eric => "Eric",
            Self::Ryan => "Ryan",
            Self::Aiden => "Aiden",
            Self::OnoAnna => "Ono_Anna",
            Self::Sohee => "Sohee",
        }
    }

    /// Parse a lowercase speaker name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vivian" => Some(Self::Vivian),
            "serena" => Some(Self::Serena),
            "uncle_fu" => Some(Self::UncleFu),
            "dylan" => Some(Self::Dylan),
            "eric" => Some(Self::Eric),
            "ryan" => Some(Self::Ryan),
            "aiden" => Some(Self::Aiden),
            "ono_anna" => Some(Self::OnoAnna),
            "sohee" => Some(Self::Sohee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Qwen3Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical voice name for the payload, or `None` when no voice is set.
pub fn canonical_voice(input: Option<&str>) -> Option<String> {
    let raw = input?;
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    match Qwen3Voice::from_str(&key) {
        Some(voice) => Some(voice.as_str().to_string()),
        None => Some(raw.to_string()),
    }
}

// =============================================================================
// URL Resolution
// =============================================================================

/// Joins the backend base URL and the request path.
///
/// The base always ends with exactly one `/` and the endpoint loses its leading
/// slashes, so the endpoint resolves relative to the full base path.
pub fn build_api_url(base_url: &str, endpoint: &str) -> TTSResult<Url> {
    let normalized_base = format!("{}/", base_url.trim_end_matches('/'));
    let normalized_endpoint = endpoint.trim_start_matches('/');

    let base = Url::parse(&normalized_base)
        .map_err(|e| TTSError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
    base.join(normalized_endpoint).map_err(|e| {
        TTSError::Config(format!("Invalid endpoint '{endpoint}' for '{base_url}': {e}"))
    })
}

// =============================================================================
// Engine Configuration
// =============================================================================

/// Resolved engine configuration.
///
/// Built once from [`TTSSettings`]; every field is normalized and the value is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    base_url: String,
    endpoint: String,
    api_url: Url,
    model_name: String,
    language: String,
    voice: Option<String>,
    timeout: Duration,
    max_retries: u32,
    fallback_model: Option<String>,
    output_format: String,
    file_extension: String,
    base_instruction: String,
    style_intensity: f32,
    cache_dir: PathBuf,
}

impl EngineConfig {
    /// Resolve raw settings.
    ///
    /// Fails only when the base URL and endpoint do not form a valid URL.
    pub fn from_settings(settings: &TTSSettings) -> TTSResult<Self> {
        let api_url = build_api_url(&settings.base_url, &settings.endpoint)?;

        let default_timeout = Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS);
        let timeout = if settings.timeout_secs > 0.0 {
            Duration::try_from_secs_f64(settings.timeout_secs).unwrap_or(default_timeout)
        } else {
            default_timeout
        };

        let base_instruction = match settings.base_instruction.trim() {
            "" => DEFAULT_BASE_INSTRUCTION.to_string(),
            instruction => instruction.to_string(),
        };

        let fallback_model = settings
            .fallback_model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .map(str::to_string);

        Ok(Self {
            base_url: settings.base_url.clone(),
            endpoint: settings.endpoint.clone(),
            api_url,
            model_name: settings.model_name.trim().to_string(),
            language: canonical_language(&settings.language),
            voice: canonical_voice(settings.voice.as_deref()),
            timeout,
            max_retries: settings.max_retries.max(1),
            fallback_model,
            output_format: settings.output_format.clone(),
            file_extension: settings.file_extension.trim().to_lowercase(),
            base_instruction,
            style_intensity: clamp_style_intensity(settings.style_intensity),
            cache_dir: settings.cache_dir.clone(),
        })
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Absolute request URL.
    #[inline]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Primary model id (may be empty when none is configured).
    #[inline]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    /// Per-attempt deadline.
    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attempt budget for the primary model, always >= 1.
    #[inline]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[inline]
    pub fn fallback_model(&self) -> Option<&str> {
        self.fallback_model.as_deref()
    }

    #[inline]
    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    /// Lowercase artifact extension, without the dot.
    #[inline]
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    #[inline]
    pub fn base_instruction(&self) -> &str {
        &self.base_instruction
    }

    /// Style intensity, always >= 1.0.
    #[inline]
    pub fn style_intensity(&self) -> f32 {
        self.style_intensity
    }

    #[inline]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
