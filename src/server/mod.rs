//! Scrape endpoint
//!
//! Serves the exposition over HTTP. Every request to the metrics path runs a
//! full collection; there is no background polling and no cached result.

use crate::collector::Collector;
use crate::config::ServerConfig;
use crate::metrics::{encode_families, CONTENT_TYPE};
use crate::ExporterError;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
struct AppState {
    collector: Arc<Collector>,
    metrics_path: Arc<str>,
}

/// Builds the router serving `metrics_path` and a landing page at `/`
pub fn router(collector: Arc<Collector>, metrics_path: &str) -> Router {
    let state = AppState {
        collector,
        metrics_path: Arc::from(metrics_path),
    };

    Router::new()
        .route("/", get(landing_page))
        .route(metrics_path, get(metrics))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C
///
/// # Errors
///
/// * `ExporterError::Config` - The listen address is not an IP address
/// * `ExporterError::Io` - Binding or serving failed
pub async fn serve(config: &ServerConfig, collector: Collector) -> Result<(), ExporterError> {
    let ip: IpAddr = config.listen_address.parse().map_err(|_| {
        crate::ConfigError::Validation(format!(
            "listen-address must be an IP address, got '{}'",
            config.listen_address
        ))
    })?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}{}", addr, config.metrics_path);

    axum::serve(listener, router(Arc::new(collector), &config.metrics_path))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn metrics(State(state): State<AppState>) -> Response {
    let families = state.collector.collect().await;

    match encode_families(&families) {
        Ok(body) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html><head><title>Sagemcom Exporter</title></head><body>\
         <h1>Sagemcom Exporter</h1>\
         <p>Router: {}</p>\
         <p><a href=\"{}\">Metrics</a></p>\
         </body></html>",
        state.collector.base_url(),
        state.metrics_path
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
