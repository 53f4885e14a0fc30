//! Configuration module for the Qwen3 TTS gateway
//!
//! This module loads raw engine settings from YAML files and environment variables.
//! Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//!
//! The settings here are raw: clamping, defaulting of blank values and
//! canonicalization happen when the engine resolves them into an
//! [`EngineConfig`](crate::core::tts::qwen3::EngineConfig).
//!
//! # Example
//! ```rust,no_run
//! use qwen3_tts_gateway::config::TTSSettings;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let settings = TTSSettings::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let settings = TTSSettings::from_file(&PathBuf::from("config.yaml"))?;
//!
//! println!("Backend at {}", settings.base_url);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

mod env;
mod merge;
mod yaml;

pub use yaml::{TtsYaml, YamlConfig};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Default request path
pub const DEFAULT_ENDPOINT: &str = "/v1/audio/speech";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// Raw engine settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TTSSettings {
    /// Backend base URL
    pub base_url: String,
    /// Request path joined onto the base URL
    pub endpoint: String,
    /// Primary model id; empty means no primary model
    pub model_name: String,
    /// Language name or ISO code
    pub language: String,
    /// Speaker name
    pub voice: Option<String>,
    /// Per-attempt timeout in seconds
    pub timeout_secs: f64,
    /// Attempts on the primary model
    pub max_retries: u32,
    /// Model tried once after the primary model is exhausted
    pub fallback_model: Option<String>,
    /// Container format requested from the backend
    pub output_format: String,
    /// Extension of the written artifact
    pub file_extension: String,
    /// Leading delivery instruction; blank uses the built-in sentence
    pub base_instruction: String,
    /// Expressiveness multiplier
    pub style_intensity: f32,
    /// Directory receiving audio artifacts
    pub cache_dir: PathBuf,
}

impl Default for TTSSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_name: String::new(),
            language: "zh".to_string(),
            voice: None,
            timeout_secs: 30.0,
            max_retries: 2,
            fallback_model: None,
            output_format: "wav".to_string(),
            file_extension: "wav".to_string(),
            base_instruction: String::new(),
            style_intensity: 1.0,
            cache_dir: PathBuf::from("cache"),
        }
    }
}

impl TTSSettings {
    /// Load settings from environment variables over the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnv`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        merge::merge_config(None)
    }

    /// Load settings from a YAML file, with environment variables as the base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// Note: the .env file is loaded by the binary at startup.
    ///
    /// # Errors
    /// Returns an error if the YAML file cannot be read or is malformed, or if
    /// environment variables have invalid formats.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        merge::merge_config(Some(yaml_config))
    }
}
