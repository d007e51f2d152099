//! Usable host boundaries and address enumeration.

use super::convert::{convert_address, parse_mask, parse_octets, to_binary, to_decimal, NumberSystem};
use super::padding::{pad_address, Boundary};
use crate::models::{leading_ones, SubnetError};
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Derive the first or last usable host of the subnet `ip` belongs to.
///
/// The binary form of `ip` is cut where the mask's leading run of 1-bits
/// ends, then completed with [`pad_address`]. A /32 mask yields `ip` itself;
/// a /31 has no usable hosts and fails with [`SubnetError::NoUsableHosts`].
pub fn usable_address(ip: &str, mask: &str, boundary: Boundary) -> Result<String, SubnetError> {
    let ip_octets = parse_octets(ip)?;
    let mask_addr = parse_mask(mask)?;

    match leading_ones(mask_addr) {
        32 => return Ok(to_decimal(ip_octets)),
        31 => return Err(SubnetError::NoUsableHosts { cidr: 31 }),
        _ => {}
    }

    let ip_bin = to_binary(ip_octets);
    let mask_bin = to_binary(mask_addr.octets());
    let prefix: String = ip_bin
        .chars()
        .zip(mask_bin.chars())
        .take_while(|(_, m)| *m != '0')
        .map(|(c, _)| c)
        .collect();

    let padded = pad_address(&prefix, boundary)?;
    let result = convert_address(&padded, NumberSystem::Decimal)?;
    log::debug!("usable_address({ip}, {mask}, {boundary:?}) = {result}");
    Ok(result)
}

/// First usable host address (network address + 1).
pub fn first_usable_address(ip: &str, mask: &str) -> Result<String, SubnetError> {
    usable_address(ip, mask, Boundary::First)
}

/// Last usable host address (broadcast address - 1).
pub fn last_usable_address(ip: &str, mask: &str) -> Result<String, SubnetError> {
    usable_address(ip, mask, Boundary::Last)
}

/// Every usable host address of the subnet, lowest first.
///
/// The range is produced lazily by integer increment, so even a /8 costs
/// nothing until iterated. /31 yields nothing and /32 yields `ip`.
pub fn enumerate_addresses(ip: &str, mask: &str) -> Result<AddressRange, SubnetError> {
    let first = match first_usable_address(ip, mask) {
        Ok(first) => first,
        Err(SubnetError::NoUsableHosts { .. }) => return Ok(AddressRange::empty()),
        Err(e) => return Err(e),
    };
    let last = last_usable_address(ip, mask)?;
    Ok(AddressRange::new(
        Ipv4Addr::from(parse_octets(&first)?),
        Ipv4Addr::from(parse_octets(&last)?),
    ))
}

/// Lazy inclusive range of IPv4 addresses yielding dotted-decimal strings.
///
/// Cloning gives an independent iterator starting from the current position,
/// so a range can be restarted by cloning it before consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    front: u64,
    // exclusive
    back: u64,
}

impl AddressRange {
    /// Range from `first` to `last` inclusive; empty when `first > last`.
    pub fn new(first: Ipv4Addr, last: Ipv4Addr) -> Self {
        let front = u32::from(first) as u64;
        let back = (u32::from(last) as u64 + 1).max(front);
        AddressRange { front, back }
    }

    pub fn empty() -> Self {
        AddressRange { front: 0, back: 0 }
    }

    /// Next address without formatting it.
    pub fn next_addr(&mut self) -> Option<Ipv4Addr> {
        if self.front >= self.back {
            return None;
        }
        let addr = Ipv4Addr::from(self.front as u32);
        self.front += 1;
        Some(addr)
    }

    fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

impl Iterator for AddressRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_addr().map(|addr| addr.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<String> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for AddressRange {
    fn next_back(&mut self) -> Option<String> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Ipv4Addr::from(self.back as u32).to_string())
    }
}

impl ExactSizeIterator for AddressRange {}

impl FusedIterator for AddressRange {}
