pub mod emotion;
pub mod instruction;
pub mod style;
pub mod tts;

// Re-export commonly used types for convenience
pub use emotion::{IntensityLevel, NormalizedText, normalize_text};
pub use instruction::{DEFAULT_BASE_INSTRUCTION, InstructionDirective, compose_instruction};
pub use style::{MAX_ACTIVE_STYLES, StyleSet, StyleTag, infer_styles};
pub use tts::{
    AudioRequestPayload, EngineConfig, ErrorCode, ModelAttemptPlan, Qwen3TTS, SpeechBackend,
    TTSError, TTSResult, create_tts_engine,
};
