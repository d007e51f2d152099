//! Error kinds raised by the subnet arithmetic.

use thiserror::Error;

/// Failure of a subnet calculation on malformed or out-of-domain input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("invalid address `{input}`: {reason}")]
    InvalidAddressFormat { input: String, reason: String },
    #[error("invalid subnet mask `{input}`: {reason}")]
    InvalidMaskFormat { input: String, reason: String },
    #[error("subnet mask `{mask}` is not a contiguous run of leading 1-bits")]
    NonContiguousMask { mask: String },
    #[error("CIDR prefix length {cidr} is outside 0..=32")]
    CidrOutOfRange { cidr: u32 },
    #[error("a /{cidr} network has no usable host addresses")]
    NoUsableHosts { cidr: u8 },
}

impl SubnetError {
    pub(crate) fn address(input: &str, reason: impl Into<String>) -> Self {
        SubnetError::InvalidAddressFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Re-label an address parse failure as a mask failure.
    pub(crate) fn into_mask_error(self) -> Self {
        match self {
            SubnetError::InvalidAddressFormat { input, reason } => {
                SubnetError::InvalidMaskFormat { input, reason }
            }
            other => other,
        }
    }
}
