use crate::extract::layout::AdslLayout;
use crate::extract::numeric_at;
use crate::metrics::MetricFamily;
use crate::table::Grid;
use crate::{ExtractError, ExtractResult};

/// Extracts the ADSL attainable and actual sync rates, in kbps
///
/// Produces four unlabeled gauges: `adsl_attainable_rate_down_kbps`,
/// `adsl_attainable_rate_up_kbps`, `adsl_rate_down_kbps` and
/// `adsl_rate_up_kbps`.
///
/// # Errors
///
/// * `ExtractError::EmptyTable` - The grid has no rows
/// * `ExtractError::ShapeMismatch` - The grid is shorter than `layout` expects
/// * `ExtractError::ValueFormat` - A rate cell is not numeric
pub fn extract_adsl_stats(grid: &Grid, layout: &AdslLayout) -> ExtractResult<Vec<MetricFamily>> {
    if grid.is_empty() {
        return Err(ExtractError::EmptyTable);
    }

    let attainable = layout.attainable_row;
    let actual = layout.actual_row;

    Ok(vec![
        MetricFamily::single(
            "adsl_attainable_rate_down_kbps",
            "ADSL Attainable Rate down (Kbps)",
            numeric_at(grid, attainable, layout.down_col)?,
        ),
        MetricFamily::single(
            "adsl_attainable_rate_up_kbps",
            "ADSL Attainable Rate up (Kbps)",
            numeric_at(grid, attainable, layout.up_col)?,
        ),
        MetricFamily::single(
            "adsl_rate_down_kbps",
            "ADSL Rate down (Kbps)",
            numeric_at(grid, actual, layout.down_col)?,
        ),
        MetricFamily::single(
            "adsl_rate_up_kbps",
            "ADSL Rate up (Kbps)",
            numeric_at(grid, actual, layout.up_col)?,
        ),
    ])
}
