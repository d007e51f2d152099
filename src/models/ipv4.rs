//! IPv4 network value type and prefix-length bit helpers.
//!
//! Provides [`Network`] for holding a network address with its prefix length,
//! along with `u32` mask arithmetic used to cross-check the string-based
//! boundary derivation.

use super::SubnetError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_info::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::CidrOutOfRange { cidr: len as u32 })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address (all host bits zero) for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address (all host bits one) for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Length of the leading run of 1-bits in a mask.
pub fn leading_ones(mask: Ipv4Addr) -> u8 {
    u32::from(mask).leading_ones() as u8
}

/// IPv4 network: network address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub len: u8,
}

impl Network {
    /// Build the network containing `addr` with the given prefix length.
    pub fn containing(addr: Ipv4Addr, len: u8) -> Result<Network, SubnetError> {
        Ok(Network {
            addr: network_addr(addr, len)?,
            len,
        })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        // len is bounded by construction through `containing`
        let mask = get_cidr_mask(self.len.min(MAX_LENGTH)).unwrap_or(u32::MAX);
        Ipv4Addr::from(u32::from(self.addr) | !mask)
    }

    /// True when `addr` falls inside this network.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}
