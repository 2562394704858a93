use crate::extract::layout::{ADSL_LAYOUT, LAN_LAYOUT, WAN_LAYOUT};
use crate::extract::{extract_adsl_stats, extract_interface_stats, extract_xtm_stats};
use crate::metrics::MetricFamily;
use crate::table::Grid;
use crate::ExtractResult;
use std::fmt;

/// A diagnostic page served by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// LAN interface counters
    Lan,

    /// WAN interface counters
    Wan,

    /// ADSL line sync status
    Adsl,

    /// XTM (ATM/PTM) counters; not mapped yet
    Xtm,
}

impl Page {
    /// Every page, in collection order
    pub const ALL: [Page; 4] = [Page::Lan, Page::Wan, Page::Adsl, Page::Xtm];

    /// Path of the page relative to the router's base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Lan => "statsifc.html",
            Self::Wan => "statswan.cmd",
            Self::Adsl => "statsadsl.html",
            Self::Xtm => "statsxtm.cmd",
        }
    }

    /// Short name used in metric names and labels
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lan => "lan",
            Self::Wan => "wan",
            Self::Adsl => "adsl",
            Self::Xtm => "xtm",
        }
    }

    /// Returns true if the page has a coordinate contract and is fetched
    pub fn is_mapped(&self) -> bool {
        !matches!(self, Self::Xtm)
    }

    /// Maps a parsed grid of this page onto metric families
    pub fn extract(&self, grid: &Grid) -> ExtractResult<Vec<MetricFamily>> {
        match self {
            Self::Lan => extract_interface_stats(grid, self.label(), &LAN_LAYOUT),
            Self::Wan => extract_interface_stats(grid, self.label(), &WAN_LAYOUT),
            Self::Adsl => extract_adsl_stats(grid, &ADSL_LAYOUT),
            Self::Xtm => Ok(extract_xtm_stats(grid)),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
