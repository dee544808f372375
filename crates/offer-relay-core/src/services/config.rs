/// Configuration loading - reads relay settings from environment variables
use crate::constants::{COMPOSITION_MODE_VAR, SENDGRID_API_KEY_VAR, SENDGRID_API_URL_VAR};
use crate::error::RelayError;
use crate::models::{CompositionMode, RelayConfig};

/// Loads configuration through a key lookup, normally `std::env::var`.
///
/// Callers load once per invocation so a key removed between invocations is
/// noticed.
pub fn load_config<F>(lookup: F) -> Result<RelayConfig, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    let sendgrid_api_key = lookup(SENDGRID_API_KEY_VAR)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| RelayError::Config(format!("{} is not set", SENDGRID_API_KEY_VAR)))?;

    let mut config = RelayConfig::new(sendgrid_api_key);

    if let Some(url) = lookup(SENDGRID_API_URL_VAR).filter(|url| !url.trim().is_empty()) {
        config.sendgrid_api_url = url.trim().to_string();
    }

    if let Some(mode) = lookup(COMPOSITION_MODE_VAR).filter(|mode| !mode.trim().is_empty()) {
        config.composition_mode = mode
            .parse::<CompositionMode>()
            .map_err(|e| RelayError::Config(format!("Invalid {}: {}", COMPOSITION_MODE_VAR, e)))?;
    }

    config
        .validate()
        .map_err(|e| RelayError::Config(format!("Invalid configuration: {}", e)))?;

    tracing::debug!(
        sendgrid_api_url = %config.sendgrid_api_url,
        composition_mode = ?config.composition_mode,
        "Configuration loaded"
    );

    Ok(config)
}
