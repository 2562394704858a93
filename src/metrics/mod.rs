//! Metric families and Prometheus exposition
//!
//! Extractors build plain [`MetricFamily`] values; the scrape endpoint turns
//! them into Prometheus text format with [`encode_families`].

mod encode;
mod family;

pub use encode::{encode_families, CONTENT_TYPE};
pub use family::{MetricFamily, MetricSample};
