//! HTML table extraction
//!
//! This module turns a device diagnostic page into a [`Grid`] of trimmed text
//! cells. It contains:
//! - A forgiving, single-pass tag scanner driven by an explicit state machine
//! - A grid type with bounds-checked positional lookups
//!
//! # Example
//!
//! ```
//! use sagemcom_exporter::table::parse_table;
//!
//! let grid = parse_table("<table><tr><td> eth0 </td><td>42</td></tr></table>");
//! assert_eq!(grid.cell(0, 0).unwrap(), "eth0");
//! assert_eq!(grid.cell(0, 1).unwrap(), "42");
//! ```

mod grid;
mod parser;

pub use grid::{Grid, GridRow};
pub use parser::parse_table;
