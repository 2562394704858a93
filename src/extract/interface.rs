use crate::extract::layout::InterfaceLayout;
use crate::extract::numeric_cell;
use crate::metrics::MetricFamily;
use crate::table::Grid;
use crate::{ExtractError, ExtractResult};

/// Packet dispositions with their received and sent base columns
const DISPOSITIONS: [(&str, usize, usize); 3] = [
    (
        "transfer",
        InterfaceLayout::RX_PACKETS_COL,
        InterfaceLayout::TX_PACKETS_COL,
    ),
    (
        "error",
        InterfaceLayout::RX_ERRORS_COL,
        InterfaceLayout::TX_ERRORS_COL,
    ),
    (
        "drop",
        InterfaceLayout::RX_DROPS_COL,
        InterfaceLayout::TX_DROPS_COL,
    ),
];

/// Extracts per-interface byte and packet counters
///
/// Rows before `layout.header_rows` are skipped. Every remaining row is one
/// interface: column 0 is its name and the counters sit at their base column
/// shifted by `layout.offset`.
///
/// Produces four families named after `label`:
/// - `<label>_network_receive_bytes` / `<label>_network_send_bytes` (`device`)
/// - `<label>_network_receive_packets` / `<label>_network_send_packets`
///   (`device`, `disposition` ∈ {transfer, error, drop})
///
/// # Errors
///
/// * `ExtractError::EmptyTable` - The grid has no rows
/// * `ExtractError::ShapeMismatch` - An interface row is too short
/// * `ExtractError::ValueFormat` - A counter cell is not numeric
///
/// Any error drops the whole page; no partial families are returned.
pub fn extract_interface_stats(
    grid: &Grid,
    label: &str,
    layout: &InterfaceLayout,
) -> ExtractResult<Vec<MetricFamily>> {
    if grid.is_empty() {
        return Err(ExtractError::EmptyTable);
    }

    let mut rx_bytes = MetricFamily::gauge(
        format!("{}_network_receive_bytes", label),
        "Received bytes for network interface",
        &["device"],
    );
    let mut tx_bytes = MetricFamily::gauge(
        format!("{}_network_send_bytes", label),
        "Sent bytes for network interface",
        &["device"],
    );
    let mut rx_packets = MetricFamily::gauge(
        format!("{}_network_receive_packets", label),
        "Received packets for network interface",
        &["device", "disposition"],
    );
    let mut tx_packets = MetricFamily::gauge(
        format!("{}_network_send_packets", label),
        "Sent packets for network interface",
        &["device", "disposition"],
    );

    for row in grid.rows_from(layout.header_rows) {
        let device = row.cell(InterfaceLayout::NAME_COL)?;

        rx_bytes.add_sample(
            &[device],
            numeric_cell(&row, layout.column(InterfaceLayout::RX_BYTES_COL))?,
        );
        tx_bytes.add_sample(
            &[device],
            numeric_cell(&row, layout.column(InterfaceLayout::TX_BYTES_COL))?,
        );

        for (disposition, rx_col, tx_col) in DISPOSITIONS {
            rx_packets.add_sample(
                &[device, disposition],
                numeric_cell(&row, layout.column(rx_col))?,
            );
            tx_packets.add_sample(
                &[device, disposition],
                numeric_cell(&row, layout.column(tx_col))?,
            );
        }
    }

    tracing::trace!(
        label,
        interfaces = rx_bytes.samples.len(),
        "Extracted interface stats"
    );

    Ok(vec![rx_bytes, tx_bytes, rx_packets, tx_packets])
}
