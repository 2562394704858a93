//! Stat extractors
//!
//! Each extractor maps a parsed [`Grid`](crate::table::Grid) of one device page
//! onto metric families using that page's coordinate contract from
//! [`layout`]. Extractors never perform I/O and either produce every family for
//! their page or fail as a whole.

mod adsl;
mod interface;
pub mod layout;
mod xtm;

pub use adsl::extract_adsl_stats;
pub use interface::extract_interface_stats;
pub use xtm::extract_xtm_stats;

use crate::table::{Grid, GridRow};
use crate::{ExtractError, ExtractResult};

/// Reads the cell at `col` of `row` as a gauge value
fn numeric_cell(row: &GridRow<'_>, col: usize) -> ExtractResult<f64> {
    parse_gauge(row.cell(col)?, row.index(), col)
}

/// Reads the cell at (`row`, `col`) of `grid` as a gauge value
fn numeric_at(grid: &Grid, row: usize, col: usize) -> ExtractResult<f64> {
    parse_gauge(grid.cell(row, col)?, row, col)
}

fn parse_gauge(text: &str, row: usize, col: usize) -> ExtractResult<f64> {
    text.parse::<f64>().map_err(|_| ExtractError::ValueFormat {
        row,
        col,
        value: text.to_string(),
    })
}
