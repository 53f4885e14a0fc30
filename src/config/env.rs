use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::{ConfigError, TTSSettings};

pub(super) const BASE_URL: &str = "QWEN3_TTS_BASE_URL";
pub(super) const ENDPOINT: &str = "QWEN3_TTS_ENDPOINT";
pub(super) const MODEL: &str = "QWEN3_TTS_MODEL";
pub(super) const LANGUAGE: &str = "QWEN3_TTS_LANGUAGE";
pub(super) const VOICE: &str = "QWEN3_TTS_VOICE";
pub(super) const TIMEOUT_SECS: &str = "QWEN3_TTS_TIMEOUT_SECS";
pub(super) const MAX_RETRIES: &str = "QWEN3_TTS_MAX_RETRIES";
pub(super) const FALLBACK_MODEL: &str = "QWEN3_TTS_FALLBACK_MODEL";
pub(super) const OUTPUT_FORMAT: &str = "QWEN3_TTS_OUTPUT_FORMAT";
pub(super) const FILE_EXTENSION: &str = "QWEN3_TTS_FILE_EXTENSION";
pub(super) const BASE_INSTRUCTION: &str = "QWEN3_TTS_BASE_INSTRUCTION";
pub(super) const STYLE_INTENSITY: &str = "QWEN3_TTS_STYLE_INTENSITY";
pub(super) const CACHE_DIR: &str = "QWEN3_TTS_CACHE_DIR";

/// Every variable read by [`load_from_env`].
pub(super) const ENV_VARS: [&str; 13] = [
    BASE_URL,
    ENDPOINT,
    MODEL,
    LANGUAGE,
    VOICE,
    TIMEOUT_SECS,
    MAX_RETRIES,
    FALLBACK_MODEL,
    OUTPUT_FORMAT,
    FILE_EXTENSION,
    BASE_INSTRUCTION,
    STYLE_INTENSITY,
    CACHE_DIR,
];

fn string_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn optional_var(name: &str) -> Option<String> {
    string_var(name).filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match optional_var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var: name, value }),
        None => Ok(None),
    }
}

/// Settings from environment variables, defaults for anything unset.
pub(super) fn load_from_env() -> Result<TTSSettings, ConfigError> {
    let defaults = TTSSettings::default();

    Ok(TTSSettings {
        base_url: string_var(BASE_URL).unwrap_or(defaults.base_url),
        endpoint: string_var(ENDPOINT).unwrap_or(defaults.endpoint),
        model_name: string_var(MODEL).unwrap_or(defaults.model_name),
        language: string_var(LANGUAGE).unwrap_or(defaults.language),
        voice: optional_var(VOICE),
        timeout_secs: parsed_var(TIMEOUT_SECS)?.unwrap_or(defaults.timeout_secs),
        max_retries: parsed_var(MAX_RETRIES)?.unwrap_or(defaults.max_retries),
        fallback_model: optional_var(FALLBACK_MODEL),
        output_format: string_var(OUTPUT_FORMAT).unwrap_or(defaults.output_format),
        file_extension: string_var(FILE_EXTENSION).unwrap_or(defaults.file_extension),
        base_instruction: string_var(BASE_INSTRUCTION).unwrap_or(defaults.base_instruction),
        style_intensity: parsed_var(STYLE_INTENSITY)?.unwrap_or(defaults.style_intensity),
        cache_dir: optional_var(CACHE_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_dir),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn cleanup_env_vars() {
        unsafe {
            for var in ENV_VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_values() {
        cleanup_env_vars();

        unsafe {
            env::set_var(BASE_URL, "http://gpu-box:8000");
            env::set_var(MODEL, "qwen3-tts-custom");
            env::set_var(VOICE, "sohee");
            env::set_var(TIMEOUT_SECS, "7.5");
            env::set_var(MAX_RETRIES, "4");
            env::set_var(FALLBACK_MODEL, "qwen3-tts-base");
            env::set_var(STYLE_INTENSITY, " 1.6 ");
            env::set_var(CACHE_DIR, "/var/cache/tts");
        }

        let settings = load_from_env().unwrap();

        assert_eq!(settings.base_url, "http://gpu-box:8000");
        assert_eq!(settings.model_name, "qwen3-tts-custom");
        assert_eq!(settings.voice, Some("sohee".to_string()));
        assert_eq!(settings.timeout_secs, 7.5);
        assert_eq!(settings.max_retries, 4);
        assert_eq!(settings.fallback_model, Some("qwen3-tts-base".to_string()));
        assert_eq!(settings.style_intensity, 1.6);
        assert_eq!(settings.cache_dir, PathBuf::from("/var/cache/tts"));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_blank_optional_vars_are_unset() {
        cleanup_env_vars();

        unsafe {
            env::set_var(VOICE, "  ");
            env::set_var(FALLBACK_MODEL, "");
            env::set_var(TIMEOUT_SECS, "");
        }

        let settings = load_from_env().unwrap();
        assert_eq!(settings.voice, None);
        assert_eq!(settings.fallback_model, None);
        assert_eq!(settings.timeout_secs, 30.0);

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_numeric_var() {
        cleanup_env_vars();

        unsafe {
            env::set_var(MAX_RETRIES, "lots");
        }

        let err = load_from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv { var: MAX_RETRIES, .. }
        ));
        assert_eq!(err.to_string(), "Invalid value for QWEN3_TTS_MAX_RETRIES: 'lots'");

        cleanup_env_vars();
    }
}
