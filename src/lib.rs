// cargo watch -x 'fmt' -x 'run'  // 'run -- report --ip 192.168.0.173 --mask 255.255.255.0'

pub mod calculator;
pub mod cli;
pub mod config;
pub mod device;
pub mod models;
pub mod output;

use calculator::{HostSource, SubnetCalculator};
use cli::{Commands, Target};
use config::Settings;
use device::NetworkSource;
use std::error::Error;

pub use calculator::{
    cidr_from_mask, convert_address, enumerate_addresses, first_usable_address, host_count,
    last_usable_address, pad_address, Boundary, NumberSystem,
};
pub use models::{SubnetError, SubnetReport};

/// Fill in an omitted IP address and/or mask from `source`.
///
/// The source is only queried for the values that are missing.
pub fn resolve_inputs(
    ip: Option<&str>,
    mask: Option<&str>,
    source: &dyn NetworkSource,
) -> Result<(String, String), Box<dyn Error>> {
    let ip = match ip {
        Some(ip) => ip.to_string(),
        None => {
            let ip = source.local_ip()?;
            log::info!("Using local ip address {ip}");
            ip
        }
    };
    let mask = resolve_mask(mask, source)?;
    Ok((ip, mask))
}

/// Use `mask`, or the locally configured mask when it is `None`.
pub fn resolve_mask(
    mask: Option<&str>,
    source: &dyn NetworkSource,
) -> Result<String, Box<dyn Error>> {
    match mask {
        Some(mask) => Ok(mask.to_string()),
        None => {
            let mask = source.subnet_mask()?;
            log::info!("Using local subnet mask {mask}");
            Ok(mask)
        }
    }
}

fn resolve_target(
    target: &Target,
    source: &dyn NetworkSource,
) -> Result<(String, String), Box<dyn Error>> {
    resolve_inputs(target.ip.as_deref(), target.mask.as_deref(), source)
}

/// Execute one CLI command, printing its result to stdout.
pub async fn run(
    command: Commands,
    source: &dyn NetworkSource,
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    log::debug!("run {command:?}");
    let calc = SubnetCalculator::new();

    match command {
        Commands::Report {
            target,
            json,
            public,
        } => {
            let (ip, mask) = resolve_target(&target, source)?;
            let report = calc.report(&ip, &mask)?;
            if json {
                println!("{}", output::report_json(&report)?);
            } else {
                output::print_report(&report);
            }
            if public {
                output::print_value("Public IP", device::public_ip_address(settings).await);
            }
        }
        Commands::Cidr { mask } => {
            let mask = resolve_mask(mask.as_deref(), source)?;
            println!("{}", calc.cidr(&mask)?);
        }
        Commands::Hosts { cidr, mask } => {
            let hosts = match cidr {
                Some(cidr) => calc.hosts(HostSource::Cidr(cidr))?,
                None => {
                    let mask = resolve_mask(mask.as_deref(), source)?;
                    calc.hosts(HostSource::Mask(&mask))?
                }
            };
            println!("{hosts}");
        }
        Commands::First { target } => {
            let (ip, mask) = resolve_target(&target, source)?;
            println!("{}", calc.first_usable(&ip, &mask)?);
        }
        Commands::Last { target } => {
            let (ip, mask) = resolve_target(&target, source)?;
            println!("{}", calc.last_usable(&ip, &mask)?);
        }
        Commands::List {
            target,
            limit,
            json,
        } => {
            let (ip, mask) = resolve_target(&target, source)?;
            let range = calc.addresses(&ip, &mask)?;
            let limit = limit.unwrap_or(settings.list_limit);
            if json {
                println!("{}", output::addresses_json(range, limit)?);
            } else {
                output::print_addresses(range, limit);
            }
        }
        Commands::Convert { addr, to } => {
            println!("{}", calc.convert(&addr, to)?);
        }
        Commands::Local { public } => {
            let ip = source.local_ip()?;
            output::print_value("Local IP", &ip);
            output::print_value("Subnet mask", source.subnet_mask()?);
            if public {
                output::print_value("Public IP", device::public_ip_address(settings).await);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedNetwork {
        calls: Cell<u32>,
    }

    impl NetworkSource for FixedNetwork {
        fn local_ip(&self) -> Result<String, Box<dyn Error>> {
            self.calls.set(self.calls.get() + 1);
            Ok("192.168.0.173".to_string())
        }

        fn subnet_mask(&self) -> Result<String, Box<dyn Error>> {
            self.calls.set(self.calls.get() + 1);
            Ok("255.255.255.0".to_string())
        }
    }

    #[test]
    fn test_resolve_inputs_defaults() {
        let source = FixedNetwork {
            calls: Cell::new(0),
        };
        let (ip, mask) = resolve_inputs(None, None, &source).unwrap();
        assert_eq!(ip, "192.168.0.173");
        assert_eq!(mask, "255.255.255.0");
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_resolve_inputs_explicit_skips_source() {
        let source = FixedNetwork {
            calls: Cell::new(0),
        };
        let (ip, mask) = resolve_inputs(Some("10.0.0.1"), Some("255.0.0.0"), &source).unwrap();
        assert_eq!((ip.as_str(), mask.as_str()), ("10.0.0.1", "255.0.0.0"));
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_run_reports_core_errors() {
        let source = FixedNetwork {
            calls: Cell::new(0),
        };
        let err = run(
            Commands::Hosts {
                cidr: Some(40),
                mask: None,
            },
            &source,
            &Settings::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "CIDR prefix length 40 is outside 0..=32");
    }

    #[tokio::test]
    async fn test_run_commands_with_defaults() {
        let source = FixedNetwork {
            calls: Cell::new(0),
        };
        let settings = Settings::default();
        run(Commands::Cidr { mask: None }, &source, &settings)
            .await
            .unwrap();
        run(
            Commands::First {
                target: Target::default(),
            },
            &source,
            &settings,
        )
        .await
        .unwrap();
        run(
            Commands::List {
                target: Target::default(),
                limit: Some(2),
                json: true,
            },
            &source,
            &settings,
        )
        .await
        .unwrap();
        assert_eq!(source.calls.get(), 5);
    }
}
