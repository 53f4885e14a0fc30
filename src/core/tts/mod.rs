pub mod backend;
pub mod cache;
pub mod error;
pub mod qwen3;

pub use backend::{HttpSpeechBackend, SpeechBackend};
pub use cache::{CacheFileAllocator, DEFAULT_CACHE_DIR, DirectoryCacheAllocator, write_artifact};
pub use error::{ErrorCode, TTSError, TTSResult, classify_response};
pub use qwen3::{
    AudioRequestPayload, EngineConfig, ModelAttemptPlan, QWEN3_PROVIDER_NAME, Qwen3TTS,
    SynthesisPreview,
};

use crate::config::TTSSettings;

/// Factory function to create a TTS engine.
///
/// Engine names are matched case-insensitively.
pub fn create_tts_engine(engine_type: &str, settings: &TTSSettings) -> TTSResult<Qwen3TTS> {
    match engine_type.trim().to_lowercase().as_str() {
        "qwen3_tts" | "qwen3-tts" | "qwen3" => Qwen3TTS::new(settings),
        _ => Err(TTSError::Config(format!(
            "Unsupported TTS engine: {engine_type}. Supported engines: qwen3_tts"
        ))),
    }
}

/// Names accepted by [`create_tts_engine`].
pub fn get_supported_tts_engines() -> Vec<&'static str> {
    vec![QWEN3_PROVIDER_NAME]
}
