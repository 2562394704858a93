//! HTTP fetcher for router pages
//!
//! The router is polled on every scrape, so each request carries a bounded
//! timeout: a hung page must never stall the scrape indefinitely.

use crate::config::DeviceConfig;
use reqwest::Client;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The router answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, truncated body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with the configured timeouts
///
/// # Example
///
/// ```no_run
/// use sagemcom_exporter::collector::build_http_client;
/// use sagemcom_exporter::config::DeviceConfig;
///
/// let client = build_http_client(&DeviceConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &DeviceConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("sagemcom-exporter/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .build()
}

/// Fetches a page body
///
/// Any status outside 2xx is an `HttpError`; transport failures, including
/// timeouts, are a `NetworkError`.
pub async fn fetch_page(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchResult::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}
