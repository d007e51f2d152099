//! Terminal output with colors.

use crate::calculator::AddressRange;
use crate::models::SubnetReport;
use colored::Colorize;

/// Left-align `label` in a column of `width`, followed by the value.
///
/// # Arguments
/// * `label` - Field name
/// * `value` - The value to print after the label
/// * `width` - Minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let value_str = value.to_string();
    let label = format!("{label}:");
    if label.len() >= width {
        format!("{label} {value_str}")
    } else {
        format!("{label:<width$}{value_str}")
    }
}

const LABEL_WIDTH: usize = 20;
const NONE: &str = "none";

/// Label/value pairs of a report in display order.
pub fn report_rows(report: &SubnetReport) -> Vec<(&'static str, String)> {
    vec![
        ("IP address", report.ip.clone()),
        ("Subnet mask", report.mask.clone()),
        ("CIDR", format!("/{}", report.cidr)),
        ("Network", report.network.to_string()),
        ("Network address", report.network_address.to_string()),
        ("Broadcast address", report.broadcast_address.to_string()),
        (
            "First usable",
            report.first_usable.clone().unwrap_or_else(|| NONE.to_string()),
        ),
        (
            "Last usable",
            report.last_usable.clone().unwrap_or_else(|| NONE.to_string()),
        ),
        ("Usable hosts", report.hosts.to_string()),
    ]
}

pub fn print_report(report: &SubnetReport) {
    for (label, value) in report_rows(report) {
        println!("{}", format_field(label, value.cyan(), LABEL_WIDTH));
    }
}

/// Print a single labelled value.
pub fn print_value<T: ToString>(label: &str, value: T) {
    println!("{}", format_field(label, value.to_string().cyan(), LABEL_WIDTH));
}

/// Print at most `limit` addresses, one per line. Returns how many were printed.
pub fn print_addresses(range: AddressRange, limit: usize) -> usize {
    let total = range.len();
    let mut printed = 0;
    for addr in range.take(limit) {
        println!("{addr}");
        printed += 1;
    }
    if printed < total {
        log::warn!(
            "{note} printed {printed} of {total} addresses, raise --limit for more",
            note = "NOTE".on_red()
        );
    }
    printed
}
