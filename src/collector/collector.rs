//! Collector - one fetch → parse → extract cycle per page, per scrape

use crate::collector::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::collector::Page;
use crate::config::{parse_base_url, DeviceConfig};
use crate::metrics::MetricFamily;
use crate::table::{parse_table, Grid};
use crate::{ExporterError, PageError};
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Name of the per-page success gauge appended to every collection
pub const PAGE_SUCCESS_METRIC: &str = "sagemcom_page_scrape_success";

/// Scrapes the router's diagnostic pages into metric families
///
/// Holds no state between calls: every [`collect`](Collector::collect)
/// re-fetches and re-parses every page.
#[derive(Debug, Clone)]
pub struct Collector {
    client: Client,
    base_url: Url,
}

impl Collector {
    /// Creates a collector for the configured router
    ///
    /// # Errors
    ///
    /// * `ExporterError::Config` - The base URL is invalid
    /// * `ExporterError::Http` - The HTTP client could not be built
    pub fn new(config: &DeviceConfig) -> Result<Self, ExporterError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a collector from an existing client and a base URL ending in `/`
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Base URL pages are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a page
    pub fn page_url(&self, page: Page) -> Result<Url, url::ParseError> {
        self.base_url.join(page.path())
    }

    /// Collects every page into one set of metric families
    ///
    /// A page that fails to fetch or extract is omitted and logged; the other
    /// pages still contribute. A `sagemcom_page_scrape_success{page}` family
    /// is always appended with 1 for each mapped page that contributed and 0
    /// for each that was omitted.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let started = Instant::now();
        let mut families = Vec::new();
        let mut success = MetricFamily::gauge(
            PAGE_SUCCESS_METRIC,
            "Whether the router page was scraped successfully (1) or omitted (0)",
            &["page"],
        );

        for page in Page::ALL {
            let outcome = self.collect_page(page).await;
            let value = match outcome {
                Ok(page_families) => {
                    families.extend(page_families);
                    1.0
                }
                Err(e) => {
                    tracing::warn!(page = %e.page(), error = %e, "Omitting page from scrape");
                    0.0
                }
            };
            if page.is_mapped() {
                success.add_sample(&[page.label()], value);
            }
        }

        families.push(success);

        tracing::debug!(
            families = families.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Collection finished"
        );

        families
    }

    /// Runs fetch → parse → extract for a single page
    ///
    /// Unmapped pages are not fetched and contribute nothing.
    pub async fn collect_page(&self, page: Page) -> Result<Vec<MetricFamily>, PageError> {
        let grid = if page.is_mapped() {
            self.fetch_grid(page).await?
        } else {
            Grid::default()
        };

        page.extract(&grid)
            .map_err(|source| PageError::Extract { page, source })
    }

    async fn fetch_grid(&self, page: Page) -> Result<Grid, PageError> {
        let url = self.page_url(page).map_err(|e| PageError::Fetch {
            page,
            url: format!("{}{}", self.base_url, page.path()),
            reason: e.to_string(),
        })?;

        tracing::debug!(page = %page, url = %url, "Fetching page");

        let body = match fetch_page(&self.client, &url).await {
            FetchResult::Success { status_code, body } => {
                tracing::trace!(page = %page, status_code, bytes = body.len(), "Fetched page");
                body
            }
            FetchResult::HttpError { status_code } => {
                return Err(PageError::Fetch {
                    page,
                    url: url.to_string(),
                    reason: format!("HTTP status {}", status_code),
                });
            }
            FetchResult::NetworkError { error } => {
                return Err(PageError::Fetch {
                    page,
                    url: url.to_string(),
                    reason: error,
                });
            }
        };

        let grid = parse_table(&body);
        tracing::trace!(page = %page, rows = grid.row_count(), "Parsed page table");
        Ok(grid)
    }
}
