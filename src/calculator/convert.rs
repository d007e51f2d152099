//! Dotted-address parsing and decimal/binary conversion.

use crate::models::SubnetError;
use itertools::Itertools;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Target representation of [`convert_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSystem {
    Binary,
    Decimal,
}

impl FromStr for NumberSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(NumberSystem::Binary),
            "decimal" | "dec" => Ok(NumberSystem::Decimal),
            other => Err(format!(
                "unknown number system '{other}', expected 'binary' or 'decimal'"
            )),
        }
    }
}

impl fmt::Display for NumberSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberSystem::Binary => write!(f, "binary"),
            NumberSystem::Decimal => write!(f, "decimal"),
        }
    }
}

fn split_octets(addr: &str) -> Result<[&str; 4], SubnetError> {
    let parts: Vec<&str> = addr.split('.').collect();
    match parts.as_slice() {
        [a, b, c, d] => Ok([*a, *b, *c, *d]),
        _ => Err(SubnetError::address(
            addr,
            format!("expected 4 octets, found {}", parts.len()),
        )),
    }
}

/// Parse a dotted-decimal address into its four octets.
pub fn parse_octets(addr: &str) -> Result<[u8; 4], SubnetError> {
    let parts = split_octets(addr)?;
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::address(
                addr,
                format!("octet '{part}' is not a decimal number"),
            ));
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(SubnetError::address(
                addr,
                format!("octet '{part}' has a leading zero"),
            ));
        }
        *slot = part.parse::<u8>().map_err(|_| {
            SubnetError::address(addr, format!("octet '{part}' is out of range 0..=255"))
        })?;
    }
    Ok(octets)
}

/// Parse a binary address (four groups of exactly 8 binary digits).
pub fn parse_binary_octets(addr: &str) -> Result<[u8; 4], SubnetError> {
    let parts = split_octets(addr)?;
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        if part.len() != 8 || !part.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(SubnetError::address(
                addr,
                format!("group '{part}' is not 8 binary digits"),
            ));
        }
        *slot = u8::from_str_radix(part, 2)
            .map_err(|e| SubnetError::address(addr, format!("group '{part}': {e}")))?;
    }
    Ok(octets)
}

/// Parse a dotted-decimal address.
pub fn parse_address(addr: &str) -> Result<Ipv4Addr, SubnetError> {
    parse_octets(addr).map(Ipv4Addr::from)
}

/// Parse a dotted-decimal subnet mask, reporting failures as mask errors.
pub fn parse_mask(mask: &str) -> Result<Ipv4Addr, SubnetError> {
    parse_address(mask).map_err(SubnetError::into_mask_error)
}

pub(crate) fn to_binary(octets: [u8; 4]) -> String {
    octets.iter().map(|o| format!("{o:08b}")).join(".")
}

pub(crate) fn to_decimal(octets: [u8; 4]) -> String {
    octets.iter().join(".")
}

/// Convert a dotted address from one number system to the other.
///
/// The input must be in the representation opposite to `to`: a decimal
/// address when converting to binary, a binary address when converting to
/// decimal.
///
/// # Examples
/// ```
/// use subnet_info::calculator::{convert_address, NumberSystem};
/// let bin = convert_address("192.168.0.1", NumberSystem::Binary).unwrap();
/// assert_eq!(bin, "11000000.10101000.00000000.00000001");
/// ```
pub fn convert_address(addr: &str, to: NumberSystem) -> Result<String, SubnetError> {
    match to {
        NumberSystem::Binary => parse_octets(addr).map(to_binary),
        NumberSystem::Decimal => parse_binary_octets(addr).map(to_decimal),
    }
}
