use anyhow::Result;
use sasyam_bot::{config, server};
use tracing::{info, warn};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments set the environment directly
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    info!("Starting Sasyam WhatsApp bot with log level: {}", log_level);
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }
    if config.whatsapp.verify_token.is_empty() {
        warn!("WHATSAPP_VERIFY_TOKEN is not set; webhook verification will always fail");
    }
    if config.whatsapp.access_token.is_empty() || config.whatsapp.phone_number_id.is_empty() {
        warn!("WhatsApp credentials are incomplete; outbound replies will be rejected");
    }

    server::run(config).await?;

    Ok(())
}
