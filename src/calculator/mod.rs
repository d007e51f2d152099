//! IPv4 subnet arithmetic.
//!
//! Everything here is pure: no I/O and no shared state.
//! - [`convert`] - dotted decimal/binary conversion and parsing
//! - [`padding`] - completion of prefix-truncated binary addresses
//! - [`cidr`] - prefix length and host count derivation
//! - [`range`] - usable host boundaries and lazy enumeration

mod cidr;
mod convert;
mod padding;
mod range;

use crate::models::{broadcast_addr, network_addr, Network, SubnetError, SubnetReport};

// Re-export public functions
pub use cidr::{
    block_size, check_contiguous, cidr_from_mask, host_count, host_count_for_mask, HostSource,
    SUBNET_BLOCKS,
};
pub use convert::{
    convert_address, parse_address, parse_binary_octets, parse_mask, parse_octets, NumberSystem,
};
pub use padding::{pad_address, Boundary};
pub use range::{
    enumerate_addresses, first_usable_address, last_usable_address, usable_address, AddressRange,
};

/// Stateless handle over the subnet functions.
///
/// Any number of calculators may coexist; each method forwards to the free
/// function of the same purpose.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubnetCalculator;

impl SubnetCalculator {
    pub fn new() -> Self {
        SubnetCalculator
    }

    pub fn convert(&self, addr: &str, to: NumberSystem) -> Result<String, SubnetError> {
        convert_address(addr, to)
    }

    pub fn pad(&self, bin_addr: &str, boundary: Boundary) -> Result<String, SubnetError> {
        pad_address(bin_addr, boundary)
    }

    pub fn cidr(&self, mask: &str) -> Result<u8, SubnetError> {
        cidr_from_mask(mask)
    }

    pub fn hosts(&self, source: HostSource<'_>) -> Result<u64, SubnetError> {
        source.host_count()
    }

    pub fn first_usable(&self, ip: &str, mask: &str) -> Result<String, SubnetError> {
        first_usable_address(ip, mask)
    }

    pub fn last_usable(&self, ip: &str, mask: &str) -> Result<String, SubnetError> {
        last_usable_address(ip, mask)
    }

    pub fn addresses(&self, ip: &str, mask: &str) -> Result<AddressRange, SubnetError> {
        enumerate_addresses(ip, mask)
    }

    /// Compute the full [`SubnetReport`] for an address and mask.
    ///
    /// The network and broadcast addresses come from the mask's leading run of
    /// 1-bits, the CIDR and host count from the block table, so both agree for
    /// every contiguous mask.
    pub fn report(&self, ip: &str, mask: &str) -> Result<SubnetReport, SubnetError> {
        let addr = parse_address(ip)?;
        let prefix = crate::models::leading_ones(parse_mask(mask)?);
        let cidr = cidr_from_mask(mask)?;
        if cidr != prefix {
            log::warn!("mask {mask} is not contiguous: block sum /{cidr}, leading run /{prefix}");
        }

        let usable = |boundary| match usable_address(ip, mask, boundary) {
            Ok(addr) => Ok(Some(addr)),
            Err(SubnetError::NoUsableHosts { .. }) => Ok(None),
            Err(e) => Err(e),
        };

        Ok(SubnetReport {
            ip: addr.to_string(),
            mask: mask.to_string(),
            cidr,
            network: Network::containing(addr, prefix)?,
            network_address: network_addr(addr, prefix)?,
            broadcast_address: broadcast_addr(addr, prefix)?,
            first_usable: usable(Boundary::First)?,
            last_usable: usable(Boundary::Last)?,
            hosts: host_count(cidr as u32)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_calculator_is_stateless() {
        let a = SubnetCalculator::new();
        let b = SubnetCalculator::default();
        assert_eq!(a, b);
        assert_eq!(a.cidr("255.255.255.0").unwrap(), 24);
        assert_eq!(b.hosts(HostSource::Cidr(17)).unwrap(), 32766);
        assert_eq!(
            a.convert("10.0.0.1", NumberSystem::Binary).unwrap(),
            "00001010.00000000.00000000.00000001"
        );
        assert_eq!(
            b.pad("00001010.", Boundary::Last).unwrap(),
            "00001010.11111111.11111111.11111110"
        );
        assert_eq!(a.first_usable("10.1.1.1", "255.255.255.0").unwrap(), "10.1.1.1");
        assert_eq!(a.last_usable("10.1.1.1", "255.255.255.0").unwrap(), "10.1.1.254");
        assert_eq!(a.addresses("10.1.1.1", "255.255.255.252").unwrap().len(), 2);
    }

    #[test]
    fn test_report() {
        let report = SubnetCalculator
            .report("192.168.0.173", "255.255.255.0")
            .unwrap();
        assert_eq!(report.cidr, 24);
        assert_eq!(report.network.to_string(), "192.168.0.0/24");
        assert_eq!(report.network_address, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(report.broadcast_address, Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(report.first_usable.as_deref(), Some("192.168.0.1"));
        assert_eq!(report.last_usable.as_deref(), Some("192.168.0.254"));
        assert_eq!(report.hosts, 254);
    }

    #[test]
    fn test_report_slash_31() {
        let report = SubnetCalculator.report("10.0.0.1", "255.255.255.254").unwrap();
        assert_eq!(report.cidr, 31);
        assert_eq!(report.first_usable, None);
        assert_eq!(report.last_usable, None);
        assert_eq!(report.hosts, 0);
        assert_eq!(report.network.to_string(), "10.0.0.0/31");
    }

    #[test]
    fn test_report_rejects_bad_mask() {
        assert!(matches!(
            SubnetCalculator.report("10.0.0.1", "255.255.0"),
            Err(SubnetError::InvalidMaskFormat { .. })
        ));
    }
}
