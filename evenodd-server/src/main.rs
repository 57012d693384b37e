// EvenOdd game server - launch and it's ready

use clap::Parser;
use evenodd_server::http::{router, ApiState};
use evenodd_server::ServerConfig;
use evenodd_spk::SpeechSynthesizer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "evenodd-server", about = "Localized even/odd game API")]
struct Args {
    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    info!("🎲 Starting EvenOdd game server...");

    // Speech synthesis is optional: text results keep working without it
    let synthesizer = match SpeechSynthesizer::new(config.speech.clone()) {
        Ok(synth) => {
            info!("🔊 Speech synthesis ready ({})", synth.engine_name());
            Some(Arc::new(synth))
        }
        Err(e) => {
            warn!("⚠️  Speech synthesis unavailable: {}. Audio disabled.", e);
            None
        }
    };

    let state = ApiState { synthesizer };
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✅ Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
    }
}
