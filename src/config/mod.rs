//! Configuration module for the Sagemcom exporter
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file (or no file at all) targets a
//! router at `http://192.168.0.1/` and listens on port 8000.
//!
//! # Example
//!
//! ```no_run
//! use sagemcom_exporter::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("exporter.toml")).unwrap();
//! println!("Scraping {}", config.device.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DeviceConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{parse_base_url, validate};
