//! Emotion Detector Server
//!
//! `serve` runs the web endpoint (default); `analyze` classifies one text
//! from the command line and prints the structured result.

use anyhow::Context;
use clap::{Parser, Subcommand};

use emotion_detector::config::Config;
use emotion_detector::handlers::emotion::render_sentence;
use emotion_detector::logic::emotion::EmotionDetector;
use emotion_detector::{create_router, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server
    Serve {
        /// Listen host (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify a single text and print the result
    Analyze {
        /// Text to analyze
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::from_env();
    let cli = Cli::parse();

    emotion_detector::logging::init(&config);

    let detector = EmotionDetector::new(config.classifier.clone())
        .context("Failed to create classifier client")?;

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config, detector).await
        }
        Command::Analyze { text } => {
            let result = detector.detect(&text).await;
            println!("{}", serde_json::to_string_pretty(&result.report())?);
            println!("{}", render_sentence(&result));
            Ok(())
        }
    }
}

async fn serve(config: Config, detector: EmotionDetector) -> anyhow::Result<()> {
    tracing::info!("Emotion Detector starting ({})...", config.environment);
    tracing::info!("Classifier: {}", detector.config().url);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    let app = create_router(AppState::new(config, detector));

    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
