//! CIDR prefix length and host count derivation.

use super::convert::{parse_mask, parse_octets};
use crate::models::{leading_ones, SubnetError, MAX_LENGTH};

/// Octet values that can end a contiguous mask, with the 1-bits each contributes.
pub const SUBNET_BLOCKS: [(u8, u8); 8] = [
    (128, 1),
    (192, 2),
    (224, 3),
    (240, 4),
    (248, 5),
    (252, 6),
    (254, 7),
    (255, 8),
];

/// Number of leading 1-bits a single mask octet contributes; 0 for any
/// value outside [`SUBNET_BLOCKS`].
pub fn block_size(octet: u8) -> u8 {
    SUBNET_BLOCKS
        .iter()
        .find(|(value, _)| *value == octet)
        .map(|(_, bits)| *bits)
        .unwrap_or(0)
}

/// Derive the CIDR prefix length from a dotted-decimal subnet mask.
///
/// Sums the block contribution of every octet. Contiguity is not checked, so
/// a mask like `255.0.255.0` yields 16; use [`check_contiguous`] to reject it.
pub fn cidr_from_mask(mask: &str) -> Result<u8, SubnetError> {
    let octets = parse_octets(mask).map_err(SubnetError::into_mask_error)?;
    Ok(octets.iter().map(|o| block_size(*o)).sum())
}

/// Return the prefix length of `mask`, or [`SubnetError::NonContiguousMask`]
/// when its 1-bits are not a single leading run.
pub fn check_contiguous(mask: &str) -> Result<u8, SubnetError> {
    let parsed = parse_mask(mask)?;
    let ones = leading_ones(parsed);
    if u32::from(parsed).count_ones() != ones as u32 {
        return Err(SubnetError::NonContiguousMask {
            mask: mask.to_string(),
        });
    }
    Ok(ones)
}

/// Usable hosts in a network of the given prefix length: `|2^(32-cidr) - 2|`.
///
/// A /32 counts as one host and a /31 as none.
pub fn host_count(cidr: u32) -> Result<u64, SubnetError> {
    if cidr > MAX_LENGTH as u32 {
        return Err(SubnetError::CidrOutOfRange { cidr });
    }
    let size = 1u64 << (MAX_LENGTH as u32 - cidr);
    Ok(size.abs_diff(2))
}

/// [`host_count`] for the prefix length derived from `mask`.
pub fn host_count_for_mask(mask: &str) -> Result<u64, SubnetError> {
    host_count(cidr_from_mask(mask)? as u32)
}

/// Input accepted by a host count request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSource<'a> {
    Cidr(u32),
    Mask(&'a str),
}

impl HostSource<'_> {
    pub fn host_count(self) -> Result<u64, SubnetError> {
        match self {
            HostSource::Cidr(cidr) => host_count(cidr),
            HostSource::Mask(mask) => host_count_for_mask(mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_table() {
        // 2^8 - 2^n for n = 7..=0
        for (value, bits) in SUBNET_BLOCKS {
            assert_eq!(value as u32, 256 - (1u32 << (8 - bits)));
            assert_eq!(value.leading_ones() as u8, bits);
        }
        assert_eq!(block_size(0), 0);
        assert_eq!(block_size(100), 0);
    }

    #[test]
    fn test_cidr_from_mask() {
        assert_eq!(cidr_from_mask("255.255.255.0").unwrap(), 24);
        assert_eq!(cidr_from_mask("128.0.0.0").unwrap(), 1);
        assert_eq!(cidr_from_mask("255.255.255.255").unwrap(), 32);
        assert_eq!(cidr_from_mask("248.0.0.0").unwrap(), 5);
        assert_eq!(cidr_from_mask("255.255.128.0").unwrap(), 17);
        assert_eq!(cidr_from_mask("0.0.0.0").unwrap(), 0);
    }

    #[test]
    fn test_cidr_from_non_contiguous_mask_is_summed() {
        assert_eq!(cidr_from_mask("255.0.255.0").unwrap(), 16);
        assert_eq!(cidr_from_mask("255.100.0.0").unwrap(), 8);
    }

    #[test]
    fn test_cidr_from_bad_mask() {
        assert!(matches!(
            cidr_from_mask("255.255.255"),
            Err(SubnetError::InvalidMaskFormat { .. })
        ));
        assert!(matches!(
            cidr_from_mask("255.255.255.x"),
            Err(SubnetError::InvalidMaskFormat { .. })
        ));
    }

    #[test]
    fn test_check_contiguous() {
        assert_eq!(check_contiguous("255.255.240.0").unwrap(), 20);
        assert_eq!(check_contiguous("0.0.0.0").unwrap(), 0);
        assert_eq!(
            check_contiguous("255.0.255.0").unwrap_err(),
            SubnetError::NonContiguousMask {
                mask: "255.0.255.0".to_string()
            }
        );
    }

    #[test]
    fn test_host_count() {
        assert_eq!(host_count(17).unwrap(), 32766);
        assert_eq!(host_count(24).unwrap(), 254);
        assert_eq!(host_count(30).unwrap(), 2);
        assert_eq!(host_count(31).unwrap(), 0);
        assert_eq!(host_count(32).unwrap(), 1);
        assert_eq!(host_count(0).unwrap(), 4_294_967_294);
        assert_eq!(
            host_count(33).unwrap_err(),
            SubnetError::CidrOutOfRange { cidr: 33 }
        );
    }

    #[test]
    fn test_host_source() {
        assert_eq!(HostSource::Mask("255.255.255.255").host_count().unwrap(), 1);
        assert_eq!(HostSource::Mask("255.255.255.252").host_count().unwrap(), 2);
        assert_eq!(HostSource::Cidr(17).host_count().unwrap(), 32766);
    }
}
