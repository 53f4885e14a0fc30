//! Qwen3 TTS engine.
//!
//! Turns conversational text into a cached audio file:
//!
//! 1. strip `<<emo:NAME>>` markers from the text
//! 2. compose the delivery directive (base, intensity, styles, emotions)
//! 3. run the attempt plan against the backend, one payload per attempt
//! 4. write the first non-empty audio response to the cache path
//!
//! Failures never cross [`Qwen3TTS::generate_audio`]: they are logged with
//! their error code and the caller gets `None`.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::config::{EngineConfig, Qwen3Language, Qwen3Voice};
use super::payload::{AudioRequestPayload, build_payload};
use super::plan::ModelAttemptPlan;
use crate::config::TTSSettings;
use crate::core::emotion::{IntensityLevel, known_emotions, normalize_text};
use crate::core::instruction::compose_instruction;
use crate::core::style::StyleTag;
use crate::core::tts::backend::{HttpSpeechBackend, SpeechBackend};
use crate::core::tts::cache::{CacheFileAllocator, DirectoryCacheAllocator, write_artifact};
use crate::core::tts::error::{TTSError, TTSResult};

/// Provider name used by the factory and in provider info.
pub const QWEN3_PROVIDER_NAME: &str = "qwen3_tts";

const NO_MODEL_DETAIL: &str = "No available model to process request";

// =============================================================================
// Prepared Request
// =============================================================================

/// Per-request data shared by every attempt.
struct PreparedRequest {
    text: String,
    emotions: Vec<String>,
    styles: Vec<StyleTag>,
    level: IntensityLevel,
    instruct: Option<String>,
}

/// Everything the engine would send for a text, without contacting the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisPreview {
    /// Emotion tags found in the raw text
    pub emotions: Vec<String>,
    /// Inferred delivery styles
    pub styles: Vec<StyleTag>,
    /// Intensity tier of the directive
    pub intensity: IntensityLevel,
    /// Models in attempt order
    pub models: Vec<String>,
    /// Payload for the first planned model
    pub payload: AudioRequestPayload,
}

// =============================================================================
// Qwen3 TTS Engine
// =============================================================================

/// Qwen3 TTS request orchestration engine.
///
/// Immutable after construction and safe to share behind an `Arc`. Concurrent
/// requests given the same stem write to the same cache file.
///
/// # Example
///
/// ```rust,no_run
/// use qwen3_tts_gateway::config::TTSSettings;
/// use qwen3_tts_gateway::core::tts::Qwen3TTS;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = TTSSettings {
///     model_name: "qwen3-tts-custom".to_string(),
///     fallback_model: Some("qwen3-tts-base".to_string()),
///     ..Default::default()
/// };
/// let tts = Qwen3TTS::new(&settings)?;
///
/// if let Some(path) = tts.generate_audio("Thank you so much! <<emo:joy>>", Some("reply-1")).await {
///     println!("audio at {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Qwen3TTS {
    config: EngineConfig,
    plan: ModelAttemptPlan,
    backend: Arc<dyn SpeechBackend>,
    allocator: Arc<dyn CacheFileAllocator>,
}

impl Qwen3TTS {
    /// Create an engine talking HTTP to the configured backend.
    ///
    /// # Errors
    /// [`TTSError::Config`] when the backend URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(settings: &TTSSettings) -> TTSResult<Self> {
        let config = EngineConfig::from_settings(settings)?;
        let backend = HttpSpeechBackend::new(config.api_url().clone(), config.timeout())?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Create an engine over any backend, caching under the configured directory.
    pub fn with_backend(config: EngineConfig, backend: Arc<dyn SpeechBackend>) -> Self {
        let allocator = Arc::new(DirectoryCacheAllocator::new(config.cache_dir()));
        let plan = ModelAttemptPlan::from_config(&config);

        debug!(
            api_url = %config.api_url(),
            models = ?plan.models(),
            total_attempts = plan.total_attempts(),
            "Qwen3 TTS engine created"
        );

        Self {
            config,
            plan,
            backend,
            allocator,
        }
    }

    /// Replace the cache path allocator.
    pub fn with_allocator(mut self, allocator: Arc<dyn CacheFileAllocator>) -> Self {
        self.allocator = allocator;
        self
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn plan(&self) -> &ModelAttemptPlan {
        &self.plan
    }

    fn prepare(&self, raw_text: &str) -> PreparedRequest {
        let normalized = normalize_text(raw_text);
        let directive = compose_instruction(
            &normalized.text,
            &normalized.emotions,
            self.config.base_instruction(),
            self.config.style_intensity(),
        );

        debug!(
            text_len = normalized.text.len(),
            emotions = ?normalized.emotions,
            styles = ?directive.styles().names(),
            intensity = %directive.level(),
            "Qwen3 TTS request prepared"
        );

        PreparedRequest {
            text: normalized.text,
            emotions: normalized.emotions,
            styles: directive.styles().tags().to_vec(),
            level: directive.level(),
            instruct: directive.as_instruct(),
        }
    }

    /// Run the pure pipeline for `text` and show what would be sent.
    pub fn preview(&self, text: &str) -> SynthesisPreview {
        let prepared = self.prepare(text);
        let model = self
            .plan
            .tiers()
            .first()
            .map(|tier| tier.model.as_str())
            .unwrap_or(self.config.model_name());
        let payload = build_payload(
            &self.config,
            model,
            &prepared.text,
            prepared.instruct.as_deref(),
        );

        SynthesisPreview {
            emotions: prepared.emotions,
            styles: prepared.styles,
            intensity: prepared.level,
            models: self.plan.models().into_iter().map(str::to_string).collect(),
            payload,
        }
    }

    /// Synthesize `text` into a cache file named from `stem`.
    ///
    /// Walks the attempt plan in order with no delay between attempts. Returns
    /// the artifact path on the first success, the write error as soon as a
    /// write fails, or the last classified error once every tier is exhausted
    /// ([`TTSError::Config`] when no attempt was possible).
    pub async fn synthesize(&self, text: &str, stem: Option<&str>) -> TTSResult<PathBuf> {
        let prepared = self.prepare(text);
        let cache_file = self
            .allocator
            .allocate(stem, self.config.file_extension());

        let tiers = self.plan.tiers();
        let mut last_error: Option<TTSError> = None;

        for (index, tier) in tiers.iter().enumerate() {
            for attempt in 1..=tier.attempts {
                let payload = build_payload(
                    &self.config,
                    &tier.model,
                    &prepared.text,
                    prepared.instruct.as_deref(),
                );

                let outcome = match self.backend.request_audio(&payload).await {
                    Ok(audio) => write_artifact(&cache_file, &audio)
                        .await
                        .map(|()| audio.len()),
                    Err(e) => Err(e),
                };

                match outcome {
                    Ok(audio_bytes) => {
                        info!(
                            model = %tier.model,
                            attempt,
                            audio_bytes,
                            path = %cache_file.display(),
                            "Qwen3 TTS audio written"
                        );
                        return Ok(cache_file);
                    }
                    Err(e) if e.is_fatal() => {
                        error!(
                            code = %e.code(),
                            model = %tier.model,
                            attempt,
                            budget = tier.attempts,
                            detail = %e.detail(),
                            "Qwen3 TTS attempt failed"
                        );
                        return Err(e);
                    }
                    Err(e) => {
                        warn!(
                            code = %e.code(),
                            model = %tier.model,
                            attempt,
                            budget = tier.attempts,
                            detail = %e.detail(),
                            "Qwen3 TTS attempt failed"
                        );
                        last_error = Some(e);
                    }
                }
            }

            if let Some(next) = tiers.get(index + 1) {
                warn!(
                    model = %tier.model,
                    attempts = tier.attempts,
                    fallback_model = %next.model,
                    "Qwen3 TTS model exhausted; trying fallback model"
                );
            }
        }

        Err(last_error.unwrap_or_else(|| TTSError::Config(NO_MODEL_DETAIL.to_string())))
    }

    /// Synthesize `text` and return the artifact path, or `None` on failure.
    ///
    /// The failure code and detail are logged; no error is returned.
    pub async fn generate_audio(&self, text: &str, stem: Option<&str>) -> Option<PathBuf> {
        match self.synthesize(text, stem).await {
            Ok(path) => Some(path),
            Err(e) => {
                // Write errors were already logged at the failing attempt.
                if !e.is_fatal() {
                    error!(
                        code = %e.code(),
                        detail = %e.detail(),
                        "Qwen3 TTS request failed"
                    );
                }
                None
            }
        }
    }

    pub fn get_provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": QWEN3_PROVIDER_NAME,
            "version": "1.0.0",
            "api_type": "HTTP REST",
            "endpoint": self.config.api_url().as_str(),
            "model": self.config.model_name(),
            "fallback_model": self.config.fallback_model(),
            "attempt_plan": self.plan.tiers(),
            "language": self.config.language(),
            "voice": self.config.voice(),
            "output_format": self.config.output_format(),
            "file_extension": self.config.file_extension(),
            "timeout_secs": self.config.timeout().as_secs_f64(),
            "style_intensity": self.config.style_intensity(),
            "supported_languages": Qwen3Language::ALL.iter().map(Qwen3Language::as_str).collect::<Vec<_>>(),
            "supported_voices": Qwen3Voice::ALL.iter().map(Qwen3Voice::as_str).collect::<Vec<_>>(),
            "supported_styles": StyleTag::rule_order().iter().map(StyleTag::as_str).collect::<Vec<_>>(),
            "supported_emotions": known_emotions(),
        })
    }
}
