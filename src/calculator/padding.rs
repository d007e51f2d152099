//! Completion of prefix-truncated binary addresses.

use crate::models::SubnetError;

/// Which end of a subnet a boundary calculation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Lowest usable host: host bits filled with 0, then network + 1.
    First,
    /// Highest usable host: host bits filled with 1, then broadcast - 1.
    Last,
}

impl Boundary {
    /// Bit used to fill missing host bits.
    pub fn fill_bit(self) -> char {
        match self {
            Boundary::First => '0',
            Boundary::Last => '1',
        }
    }

    /// Value forced into the final address bit to step off the network or
    /// broadcast address onto a usable host.
    fn usable_bit(self) -> char {
        match self {
            Boundary::First => '1',
            Boundary::Last => '0',
        }
    }
}

/// Pad a binary address to four 8-bit groups and step it onto a usable host.
///
/// Every group shorter than 8 bits (including an empty trailing group) is
/// right-padded with the boundary's fill bit; missing groups are added as 8
/// fill bits. The last bit of the fourth octet is then forced to `1` for
/// [`Boundary::First`] (network address + 1) or `0` for [`Boundary::Last`]
/// (broadcast address - 1).
///
/// # Examples
/// ```
/// use subnet_info::calculator::{pad_address, Boundary};
/// let first = pad_address("11000000.10101000.00000000.", Boundary::First).unwrap();
/// assert_eq!(first, "11000000.10101000.00000000.00000001");
/// ```
pub fn pad_address(bin_addr: &str, boundary: Boundary) -> Result<String, SubnetError> {
    let groups: Vec<&str> = bin_addr.split('.').collect();
    if groups.len() > 4 {
        return Err(SubnetError::address(
            bin_addr,
            format!("expected at most 4 groups, found {}", groups.len()),
        ));
    }

    let fill = boundary.fill_bit();
    let mut octets: Vec<String> = Vec::with_capacity(4);
    for i in 0..4 {
        let group = groups.get(i).copied().unwrap_or("");
        if group.len() > 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(SubnetError::address(
                bin_addr,
                format!("group '{group}' is not at most 8 binary digits"),
            ));
        }
        let mut octet = String::with_capacity(8);
        octet.push_str(group);
        octet.extend(std::iter::repeat(fill).take(8 - group.len()));
        octets.push(octet);
    }

    if let Some(last) = octets.last_mut() {
        last.pop();
        last.push(boundary.usable_bit());
    }
    log::trace!("pad_address({bin_addr}, {boundary:?}) -> {octets:?}");

    Ok(octets.join("."))
}
