//! Command line arguments.

use crate::calculator::NumberSystem;
use clap::{Args, Parser, Subcommand};

/// IPv4 subnet calculator. Omitted addresses and masks are read from the
/// local machine.
#[derive(Parser, Debug)]
#[command(name = "subnet-info", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Address and mask to calculate for.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// IPv4 address, e.g. 192.168.0.173 (default: local address)
    #[arg(long)]
    pub ip: Option<String>,
    /// Subnet mask, e.g. 255.255.255.0 (default: local mask)
    #[arg(long)]
    pub mask: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Full subnet summary
    Report {
        #[command(flatten)]
        target: Target,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also look up the public IP
        #[arg(long)]
        public: bool,
    },
    /// CIDR prefix length of a mask
    Cidr {
        #[arg(long)]
        mask: Option<String>,
    },
    /// Usable host count for a prefix length or mask
    Hosts {
        #[arg(long, conflicts_with = "mask")]
        cidr: Option<u32>,
        #[arg(long)]
        mask: Option<String>,
    },
    /// First usable host address
    First {
        #[command(flatten)]
        target: Target,
    },
    /// Last usable host address
    Last {
        #[command(flatten)]
        target: Target,
    },
    /// Every usable host address
    List {
        #[command(flatten)]
        target: Target,
        /// Maximum number of addresses to print
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Convert an address between decimal and binary
    Convert {
        addr: String,
        /// binary or decimal
        #[arg(long, default_value = "binary")]
        to: NumberSystem,
    },
    /// Local IP, local subnet mask and optionally the public IP
    Local {
        #[arg(long)]
        public: bool,
    },
}

impl Cli {
    /// Subcommand to run, `report` for the local machine when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Report {
            target: Target::default(),
            json: false,
            public: false,
        })
    }
}
