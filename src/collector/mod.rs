//! Scrape-time collection of router statistics
//!
//! This module contains the collection pipeline, including:
//! - The set of known diagnostic pages and their coordinate contracts
//! - HTTP fetching of page bodies with bounded timeouts
//! - Per-page fetch → parse → extract, with page-scoped failure isolation

#[allow(clippy::module_inception)]
mod collector;
mod fetcher;
mod page;

pub use collector::{Collector, PAGE_SUCCESS_METRIC};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use page::Page;
