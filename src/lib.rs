//! Sagemcom Exporter: Prometheus metrics for a Sagemcom F@ST 3864 router
//!
//! This crate scrapes the router's diagnostic pages, turns the HTML tables they
//! carry into grids of text cells, maps known cell coordinates onto gauge
//! families, and serves the result on a pull-based scrape endpoint.

pub mod collector;
pub mod config;
pub mod extract;
pub mod metrics;
pub mod server;
pub mod table;

use collector::Page;
use thiserror::Error;

/// Main error type for process-level operations
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Positional lookup failures on a parsed grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
}

/// Failures while mapping a grid onto metric families
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("table is empty")]
    EmptyTable,

    #[error("table shape mismatch: {0}")]
    ShapeMismatch(#[from] GridError),

    #[error("cell ({row}, {col}) is not numeric: {value:?}")]
    ValueFormat {
        row: usize,
        col: usize,
        value: String,
    },
}

/// Page-scoped failures; a page that fails is omitted from the scrape
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to fetch {page} page from {url}: {reason}")]
    Fetch {
        page: Page,
        url: String,
        reason: String,
    },

    #[error("Failed to extract {page} stats: {source}")]
    Extract {
        page: Page,
        #[source]
        source: ExtractError,
    },
}

impl PageError {
    /// The page this failure belongs to
    pub fn page(&self) -> Page {
        match self {
            Self::Fetch { page, .. } | Self::Extract { page, .. } => *page,
        }
    }
}

/// Result type alias for process-level operations
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use collector::Collector;
pub use config::Config;
pub use metrics::{encode_families, MetricFamily, MetricSample};
pub use table::{parse_table, Grid};
