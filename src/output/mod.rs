//! Output formatting for subnet data.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{addresses_json, report_json, AddressList};
pub use terminal::{format_field, print_addresses, print_report, print_value, report_rows};
