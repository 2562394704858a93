//! Coordinate contracts for the device's diagnostic pages
//!
//! These constants encode the firmware's undocumented page layout. A layout
//! change on the device should only ever require edits in this file.

/// Column layout of the LAN and WAN interface statistics tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceLayout {
    /// Number of header rows before the first interface row
    pub header_rows: usize,

    /// Shift applied to every counter column
    pub offset: usize,
}

impl InterfaceLayout {
    /// Column holding the interface name
    pub const NAME_COL: usize = 0;

    /// Received bytes, before applying the offset
    pub const RX_BYTES_COL: usize = 1;
    /// Received packets transferred, before applying the offset
    pub const RX_PACKETS_COL: usize = 2;
    /// Received packets errored, before applying the offset
    pub const RX_ERRORS_COL: usize = 3;
    /// Received packets dropped, before applying the offset
    pub const RX_DROPS_COL: usize = 4;

    /// Sent bytes, before applying the offset
    pub const TX_BYTES_COL: usize = 5;
    /// Sent packets transferred, before applying the offset
    pub const TX_PACKETS_COL: usize = 6;
    /// Sent packets errored, before applying the offset
    pub const TX_ERRORS_COL: usize = 7;
    /// Sent packets dropped, before applying the offset
    pub const TX_DROPS_COL: usize = 8;

    /// Absolute column of a counter for this layout
    pub const fn column(&self, base: usize) -> usize {
        base + self.offset
    }
}

/// `statsifc.html`: two header rows, counters start right after the name
pub const LAN_LAYOUT: InterfaceLayout = InterfaceLayout {
    header_rows: 2,
    offset: 0,
};

/// `statswan.cmd`: two header rows, an extra description column after the name
pub const WAN_LAYOUT: InterfaceLayout = InterfaceLayout {
    header_rows: 2,
    offset: 1,
};

/// Cell coordinates of the ADSL sync-rate figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdslLayout {
    /// Row holding the attainable rates
    pub attainable_row: usize,

    /// Row holding the actual sync rates
    pub actual_row: usize,

    /// Column holding downstream values
    pub down_col: usize,

    /// Column holding upstream values
    pub up_col: usize,
}

/// `statsadsl.html`
pub const ADSL_LAYOUT: AdslLayout = AdslLayout {
    attainable_row: 10,
    actual_row: 14,
    down_col: 1,
    up_col: 2,
};
