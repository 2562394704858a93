use crate::metrics::MetricFamily;
use crate::table::Grid;

/// Extracts XTM (ATM/PTM) statistics
///
/// The XTM page has no mapped layout yet, so this contributes nothing. It
/// never fails.
pub fn extract_xtm_stats(_grid: &Grid) -> Vec<MetricFamily> {
    Vec::new()
}
