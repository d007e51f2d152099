//! Local network information used as default calculator input.
//!
//! - [`cli`] - shell command execution
//! - [`local`] - local IPv4 address probe
//! - [`mask`] - subnet mask lookup in `ifconfig`/`ipconfig` output
//! - [`public`] - public IPv4 address over HTTP

mod cli;
mod local;
mod mask;
mod public;

use crate::config::Settings;
use std::error::Error;

// Re-export public types and functions
pub use cli::run;
pub use local::local_ip_address;
pub use mask::{local_subnet_mask, mask_command, parse_subnet_mask};
pub use public::public_ip_address;

/// Supplier of the local address and mask when the caller leaves them out.
pub trait NetworkSource {
    fn local_ip(&self) -> Result<String, Box<dyn Error>>;
    fn subnet_mask(&self) -> Result<String, Box<dyn Error>>;
}

/// [`NetworkSource`] backed by the running machine.
#[derive(Debug, Clone, Default)]
pub struct SystemNetwork {
    settings: Settings,
}

impl SystemNetwork {
    pub fn new(settings: Settings) -> Self {
        SystemNetwork { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl NetworkSource for SystemNetwork {
    fn local_ip(&self) -> Result<String, Box<dyn Error>> {
        local_ip_address(&self.settings.probe_addr)
    }

    fn subnet_mask(&self) -> Result<String, Box<dyn Error>> {
        let ip = self.local_ip()?;
        local_subnet_mask(&ip)
    }
}
