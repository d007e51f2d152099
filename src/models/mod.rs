//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`SubnetError`] - error kinds raised on malformed input
//! - [`Network`] - network address with prefix length, plus `u32` mask helpers
//! - [`SubnetReport`] - serializable summary of one address/mask pair

mod error;
mod ipv4;
mod report;

// Re-export public types
pub use error::SubnetError;
pub use ipv4::{broadcast_addr, get_cidr_mask, leading_ones, network_addr, Network, MAX_LENGTH};
pub use report::SubnetReport;
