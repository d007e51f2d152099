//! Subnet summary produced for one address/mask pair.

use super::Network;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the calculator can tell about an address and its mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// Address the report was computed for.
    pub ip: String,
    /// Subnet mask as supplied.
    pub mask: String,
    /// Prefix length derived from the mask block table.
    pub cidr: u8,
    /// Network in `a.b.c.d/len` form.
    pub network: Network,
    /// All host bits zero.
    pub network_address: Ipv4Addr,
    /// All host bits one.
    pub broadcast_address: Ipv4Addr,
    /// First usable host, `None` when the network has none (/31).
    pub first_usable: Option<String>,
    /// Last usable host, `None` when the network has none (/31).
    pub last_usable: Option<String>,
    /// Usable host count.
    pub hosts: u64,
}
