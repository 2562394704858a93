//! Prometheus text encoding
//!
//! Each scrape gets a fresh [`Registry`]: families are registered as gauges,
//! gathered, and rendered with the [`TextEncoder`]. Nothing carries over
//! between scrapes.

use crate::metrics::MetricFamily;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

/// Content type of the encoded exposition
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

/// Encodes metric families in the Prometheus text exposition format
///
/// Unlabeled families without a sample are skipped; labeled families without
/// samples render nothing.
///
/// # Errors
///
/// Returns an error if a family name or label is invalid, if two families
/// share a name, or if encoding fails.
pub fn encode_families(families: &[MetricFamily]) -> Result<String, prometheus::Error> {
    let registry = Registry::new();

    for family in families {
        register_family(&registry, family)?;
    }

    let metric_families = registry.gather();
    tracing::debug!(
        metric_family_count = metric_families.len(),
        "Encoding metrics to Prometheus text format"
    );

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;

    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Encoder produced invalid UTF-8: {}", e)))
}

fn register_family(registry: &Registry, family: &MetricFamily) -> Result<(), prometheus::Error> {
    let opts = Opts::new(family.name.as_str(), family.help.as_str());

    if family.label_names.is_empty() {
        let Some(sample) = family.samples.last() else {
            return Ok(());
        };
        let gauge = Gauge::with_opts(opts)?;
        gauge.set(sample.value);
        return registry.register(Box::new(gauge));
    }

    let label_names: Vec<&str> = family.label_names.iter().map(String::as_str).collect();
    let gauge_vec = GaugeVec::new(opts, &label_names)?;
    for sample in &family.samples {
        let values: Vec<&str> = sample.label_values.iter().map(String::as_str).collect();
        gauge_vec.get_metric_with_label_values(&values)?.set(sample.value);
    }
    registry.register(Box::new(gauge_vec))
}
