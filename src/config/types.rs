use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for the exporter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Router connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the router's web interface; page paths are appended to it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Upper bound on a single page request, in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on establishing a connection, in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl DeviceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.0.1/".to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// Scrape endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind
    #[serde(rename = "listen-address")]
    pub listen_address: String,

    /// TCP port to bind
    pub port: u16,

    /// HTTP path serving the exposition
    #[serde(rename = "metrics-path")]
    pub metrics_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0".to_string(),
            port: 8000,
            metrics_path: "/metrics".to_string(),
        }
    }
}
