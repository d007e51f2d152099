//! JSON output for reports and address lists.

use crate::calculator::AddressRange;
use crate::models::SubnetReport;
use serde::Serialize;
use std::error::Error;

/// Address listing with the total size of the range it was cut from.
#[derive(Serialize, Debug)]
pub struct AddressList {
    pub total: usize,
    pub addresses: Vec<String>,
}

impl AddressList {
    pub fn new(range: AddressRange, limit: usize) -> Self {
        AddressList {
            total: range.len(),
            addresses: range.take(limit).collect(),
        }
    }
}

pub fn report_json(report: &SubnetReport) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing report: {e}").into())
}

pub fn addresses_json(range: AddressRange, limit: usize) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(&AddressList::new(range, limit))
        .map_err(|e| format!("Error serializing addresses: {e}").into())
}
