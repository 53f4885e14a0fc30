use super::env::load_from_env;
use super::yaml::YamlConfig;
use super::{ConfigError, TTSSettings};

/// Environment settings as the base, YAML values layered on top.
pub(super) fn merge_config(yaml: Option<YamlConfig>) -> Result<TTSSettings, ConfigError> {
    let mut settings = load_from_env()?;

    let Some(tts) = yaml.and_then(|config| config.tts) else {
        return Ok(settings);
    };

    if let Some(base_url) = tts.base_url {
        settings.base_url = base_url;
    }
    if let Some(endpoint) = tts.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(model_name) = tts.model_name {
        settings.model_name = model_name;
    }
    if let Some(language) = tts.language {
        settings.language = language;
    }
    if tts.voice.is_some() {
        settings.voice = tts.voice;
    }
    if let Some(timeout_secs) = tts.timeout_secs {
        settings.timeout_secs = timeout_secs;
    }
    if let Some(max_retries) = tts.max_retries {
        settings.max_retries = max_retries;
    }
    if tts.fallback_model.is_some() {
        settings.fallback_model = tts.fallback_model;
    }
    if let Some(output_format) = tts.output_format {
        settings.output_format = output_format;
    }
    if let Some(file_extension) = tts.file_extension {
        settings.file_extension = file_extension;
    }
    if let Some(base_instruction) = tts.base_instruction {
        settings.base_instruction = base_instruction;
    }
    if let Some(style_intensity) = tts.style_intensity {
        settings.style_intensity = style_intensity;
    }
    if let Some(cache_dir) = tts.cache_dir {
        settings.cache_dir = cache_dir;
    }

    Ok(settings)
}
