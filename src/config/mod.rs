mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads `config.yaml` (or `CONFIG_PATH`) when present, then applies
/// environment overrides.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let config = load_from(&config_path).await?;

    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Reads a YAML config file. A missing file falls back to defaults.
pub async fn load_from(config_path: &str) -> Result<Config> {
    if !tokio::fs::try_exists(config_path).await? {
        debug!("No configuration file at {}, using defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays environment-provided settings on top of `config`.
///
/// `lookup` abstracts the environment so overrides can be exercised without
/// mutating process state.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = lookup("WHATSAPP_TOKEN") {
        config.whatsapp.access_token = token;
    }
    if let Some(id) = lookup("WHATSAPP_PHONE_NUMBER_ID") {
        config.whatsapp.phone_number_id = id;
    }
    if let Some(token) = lookup("WHATSAPP_VERIFY_TOKEN") {
        config.whatsapp.verify_token = token;
    }
    if let Some(url) = lookup("WHATSAPP_API_BASE_URL") {
        config.whatsapp.api_base_url = url;
    }
    if let Some(version) = lookup("WHATSAPP_API_VERSION") {
        config.whatsapp.api_version = version;
    }
    if let Some(number) = lookup("SASYAM_SUPPORT_NUMBER") {
        config.store.support_number = number;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a valid port number, got '{port}'")))?;
    }

    Ok(config)
}
