use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing::info;

use qwen3_tts_gateway::config::TTSSettings;
use qwen3_tts_gateway::core::tts::Qwen3TTS;

/// Qwen3 TTS Gateway - emotion-aware speech synthesis with retries and model fallback
#[derive(Parser, Debug)]
#[command(name = "qwen3-tts-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthesize text into a cached audio file and print its path
    Synth {
        /// Text to speak; may contain <<emo:NAME>> markers
        #[arg(short = 't', long = "text")]
        text: String,

        /// Output file name without extension
        #[arg(short = 's', long = "stem")]
        stem: Option<String>,
    },

    /// Print the request that would be sent, without contacting the backend
    Preview {
        /// Text to speak; may contain <<emo:NAME>> markers
        #[arg(short = 't', long = "text")]
        text: String,
    },

    /// Print the resolved engine configuration
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration from file or environment
    let settings = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        TTSSettings::from_file(&config_path)?
    } else {
        TTSSettings::from_env()?
    };

    let tts = Qwen3TTS::new(&settings).map_err(|e| anyhow!("{} ({})", e, e.code()))?;

    match cli.command {
        Commands::Synth { text, stem } => match tts.generate_audio(&text, stem.as_deref()).await {
            Some(path) => {
                println!("{}", path.display());
                Ok(ExitCode::SUCCESS)
            }
            None => Ok(ExitCode::FAILURE),
        },
        Commands::Preview { text } => {
            println!("{}", serde_json::to_string_pretty(&tts.preview(&text))?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Info => {
            println!("{}", serde_json::to_string_pretty(&tts.get_provider_info())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
