//! Qwen3 TTS backend module.
//!
//! Request orchestration for a self-hosted Qwen3 text-to-speech service.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/v1/audio/speech` (configurable)
//! - Body: `{model, language, text, output_format, voice?, instruct?}`
//! - Response: raw audio bytes in `output_format`
//!
//! # Supported Voices
//!
//! Vivian, Serena, Uncle_Fu, Dylan, Eric, Ryan, Aiden, Ono_Anna, Sohee.
//! Other names are sent as given.
//!
//! # Example
//!
//! ```rust,ignore
//! use qwen3_tts_gateway::config::TTSSettings;
//! use qwen3_tts_gateway::core::tts::Qwen3TTS;
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = TTSSettings {
//!         model_name: "qwen3-tts-custom".to_string(),
//!         voice: Some("sohee".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let tts = Qwen3TTS::new(&settings).unwrap();
//!     let path = tts.generate_audio("안녕하세요! <<emo:joy>>", None).await;
//! }
//! ```

mod config;
mod payload;
mod plan;
mod provider;

pub use config::{
    AUTO_LANGUAGE, DEFAULT_TIMEOUT_SECS, EngineConfig, Qwen3Language, Qwen3Voice, build_api_url,
    canonical_language, canonical_voice,
};
pub use payload::{AudioRequestPayload, build_payload};
pub use plan::{AttemptTier, FALLBACK_ATTEMPTS, ModelAttemptPlan};
pub use provider::{QWEN3_PROVIDER_NAME, Qwen3TTS, SynthesisPreview};
