//! Request body for the speech endpoint.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

/// JSON body POSTed to the backend.
///
/// `voice` and `instruct` are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRequestPayload {
    pub model: String,
    pub language: String,
    pub text: String,
    pub output_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruct: Option<String>,
}

/// Builds the payload for one attempt against `model`.
///
/// Blank instructions are dropped rather than sent as an empty field.
pub fn build_payload(
    config: &EngineConfig,
    model: &str,
    text: &str,
    instruct: Option<&str>,
) -> AudioRequestPayload {
    AudioRequestPayload {
        model: model.to_string(),
        language: config.language().to_string(),
        text: text.to_string(),
        output_format: config.output_format().to_string(),
        voice: config.voice().map(str::to_string),
        instruct: instruct
            .filter(|instruction| !instruction.trim().is_empty())
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TTSSettings;
    use serde_json::json;

    fn engine_config(voice: Option<&str>) -> EngineConfig {
        let settings = TTSSettings {
            language: "korean".to_string(),
            voice: voice.map(str::to_string),
            ..Default::default()
        };
        EngineConfig::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_full_payload_json() {
        let config = engine_config(Some("sohee"));
        let payload = build_payload(&config, "qwen3-tts", "안녕하세요", Some("Be warm."));

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "model": "qwen3-tts",
                "language": "Korean",
                "text": "안녕하세요",
                "output_format": "wav",
                "voice": "Sohee",
                "instruct": "Be warm.",
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let config = engine_config(None);
        let payload = build_payload(&config, "qwen3-tts", "hi", None);
        let value = serde_json::to_value(&payload).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("voice"));
        assert!(!object.contains_key("instruct"));
    }

    #[test]
    fn test_blank_instruct_omitted() {
        let config = engine_config(None);
        let payload = build_payload(&config, "m", "hi", Some("  "));
        assert_eq!(payload.instruct, None);
    }

    #[test]
    fn test_only_model_varies() {
        let config = engine_config(Some("ryan"));
        let primary = build_payload(&config, "primary", "hello", Some("Be calm."));
        let fallback = build_payload(&config, "fallback", "hello", Some("Be calm."));

        assert_ne!(primary.model, fallback.model);
        assert_eq!(
            AudioRequestPayload {
                model: primary.model.clone(),
                ..fallback
            },
            primary
        );
    }
}
