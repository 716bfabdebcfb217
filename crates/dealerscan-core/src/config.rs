use crate::app_config::{AppConfig, DEFAULT_ENDPOINT_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Skips `.env` loading; the caller owns the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let endpoint_url = parse_endpoint_url(&or_default(
        "DEALERSCAN_ENDPOINT_URL",
        DEFAULT_ENDPOINT_URL,
    ))?;
    let user_agent = or_default("DEALERSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("DEALERSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_request_delay_ms = parse_u64("DEALERSCAN_INTER_REQUEST_DELAY_MS", "2000")?;
    let log_level = or_default("DEALERSCAN_LOG_LEVEL", "info");
    let log_file = PathBuf::from(or_default("DEALERSCAN_LOG_FILE", "scraper.log"));
    let regions_dir = PathBuf::from(or_default("DEALERSCAN_REGIONS_DIR", "./config/regions"));

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "DEALERSCAN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        endpoint_url,
        user_agent,
        request_timeout_secs,
        inter_request_delay_ms,
        log_level,
        log_file,
        regions_dir,
    })
}

/// Accept only absolute `http://` or `https://` endpoint URLs.
fn parse_endpoint_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "DEALERSCAN_ENDPOINT_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
