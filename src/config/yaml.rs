use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present here
/// override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// tts:
///   base_url: "http://127.0.0.1:8000"
///   endpoint: "/v1/audio/speech"
///   model_name: "qwen3-tts-custom"
///   fallback_model: "qwen3-tts-base"
///   language: "korean"
///   voice: "sohee"
///   timeout_secs: 30
///   max_retries: 2
///   output_format: "wav"
///   file_extension: "wav"
///   base_instruction: "Speak like a friendly streamer."
///   style_intensity: 1.4
///   cache_dir: "cache"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub tts: Option<TtsYaml>,
}

/// TTS engine configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TtsYaml {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub model_name: Option<String>,
    pub language: Option<String>,
    pub voice: Option<String>,
    pub timeout_secs: Option<f64>,
    pub max_retries: Option<u32>,
    pub fallback_model: Option<String>,
    pub output_format: Option<String>,
    pub file_extension: Option<String>,
    pub base_instruction: Option<String>,
    pub style_intensity: Option<f32>,
    pub cache_dir: Option<PathBuf>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: YamlConfig = serde_yaml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
tts:
  base_url: "http://127.0.0.1:8000"
  endpoint: "/v1/audio/speech"
  model_name: "qwen3-tts-custom"
  fallback_model: "qwen3-tts-base"
  language: "korean"
  voice: "sohee"
  timeout_secs: 30
  max_retries: 2
  output_format: "wav"
  file_extension: "WAV"
  base_instruction: "Speak like a friendly streamer."
  style_intensity: 1.4
  cache_dir: "cache"
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        let tts = config.tts.unwrap();

        assert_eq!(tts.model_name, Some("qwen3-tts-custom".to_string()));
        assert_eq!(tts.fallback_model, Some("qwen3-tts-base".to_string()));
        assert_eq!(tts.language, Some("korean".to_string()));
        assert_eq!(tts.timeout_secs, Some(30.0));
        assert_eq!(tts.max_retries, Some(2));
        assert_eq!(tts.file_extension, Some("WAV".to_string()));
        assert_eq!(tts.style_intensity, Some(1.4));
        assert_eq!(tts.cache_dir, Some(PathBuf::from("cache")));
    }

    #[test]
    fn test_yaml_config_partial() {
        let yaml = r#"
tts:
  model_name: "only-model"
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        let tts = config.tts.unwrap();
        assert_eq!(tts.model_name, Some("only-model".to_string()));
        assert!(tts.base_url.is_none());
        assert!(tts.voice.is_none());
    }

    #[test]
    fn test_yaml_config_without_tts_section() {
        let config: YamlConfig = serde_yaml::from_str("other: 1\n").unwrap();
        assert!(config.tts.is_none());
    }

    #[test]
    fn test_yaml_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "tts:\n  max_retries: 5\n").unwrap();

        let config = YamlConfig::from_file(&path).unwrap();
        assert_eq!(config.tts.unwrap().max_retries, Some(5));
    }

    #[test]
    fn test_yaml_from_file_wrong_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "tts:\n  max_retries: many\n").unwrap();

        let err = YamlConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
