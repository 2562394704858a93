//! Sagemcom exporter main entry point
//!
//! Builds the collector once and hands it to the scrape server, which runs a
//! full collection on every inbound scrape until interrupted.

use anyhow::Context;
use clap::Parser;
use sagemcom_exporter::config::{load_config_with_hash, validate, Config};
use sagemcom_exporter::{encode_families, server, Collector};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sagemcom Exporter: Prometheus metrics for a Sagemcom F@ST 3864 router
///
/// Scrapes the router's LAN, WAN and ADSL statistics pages on every
/// Prometheus scrape and exposes them as gauges.
#[derive(Parser, Debug)]
#[command(name = "sagemcom-exporter")]
#[command(version)]
#[command(about = "Prometheus exporter for Sagemcom router statistics", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the router base URL, e.g. http://192.168.0.1/
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the port the scrape endpoint listens on
    #[arg(short, long)]
    port: Option<u16>,

    /// Collect once, print the exposition to stdout and exit
    #[arg(long)]
    once: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load(&cli)?;
    tracing::info!(
        "Configured to collect stats from '{}'",
        config.device.base_url
    );

    let collector = Collector::new(&config.device).context("Failed to build collector")?;

    if cli.once {
        let families = collector.collect().await;
        let text = encode_families(&families).context("Failed to encode metrics")?;
        print!("{}", text);
        return Ok(());
    }

    server::serve(&config.server, collector)
        .await
        .context("Scrape server failed")?;

    Ok(())
}

/// Loads the config file if one was given, then applies CLI overrides
fn load(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.device.base_url = base_url.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sagemcom_exporter=info,warn"),
            1 => EnvFilter::new("sagemcom_exporter=debug,info"),
            2 => EnvFilter::new("sagemcom_exporter=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
