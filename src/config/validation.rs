use crate::config::types::{Config, DeviceConfig, ServerConfig};
use crate::ConfigError;
use std::net::IpAddr;
use url::Url;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_device_config(&config.device)?;
    validate_server_config(&config.server)?;
    Ok(())
}

/// Parses the router base URL so page paths can be joined onto it
///
/// A missing trailing slash is added, so `http://host/cgi` and
/// `http://host/cgi/` both resolve pages under `/cgi/`.
pub fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' has no host",
            base_url
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Validates router connection configuration
fn validate_device_config(config: &DeviceConfig) -> Result<(), ConfigError> {
    parse_base_url(&config.base_url)?;

    validate_timeout("request-timeout-secs", config.request_timeout_secs)?;
    validate_timeout("connect-timeout-secs", config.connect_timeout_secs)?;

    if config.connect_timeout_secs > config.request_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) must not exceed request-timeout-secs ({})",
            config.connect_timeout_secs, config.request_timeout_secs
        )));
    }

    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

/// Validates scrape endpoint configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.listen_address.parse::<IpAddr>().map_err(|_| {
        ConfigError::Validation(format!(
            "listen-address must be an IP address, got '{}'",
            config.listen_address
        ))
    })?;

    if config.port == 0 {
        return Err(ConfigError::Validation("port must be non-zero".to_string()));
    }

    if !config.metrics_path.starts_with('/') || config.metrics_path == "/" {
        return Err(ConfigError::Validation(format!(
            "metrics-path must start with '/' and not be the root, got '{}'",
            config.metrics_path
        )));
    }

    // ':' and '*' mark route captures and wildcards
    if config.metrics_path.contains([':', '*']) {
        return Err(ConfigError::Validation(format!(
            "metrics-path must be a literal path without ':' or '*', got '{}'",
            config.metrics_path
        )));
    }

    Ok(())
}
