//! Constants and environment-driven settings.

use std::env;
use std::time::Duration;

/// log4rs configuration file read by `main`.
pub const LOG_CONFIG: &str = "log4rs.yml";

/// Service answering with the caller's public IPv4 as plain text.
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Remote endpoint a UDP socket is "connected" to when probing the local IP.
/// No packet is sent.
pub const DEFAULT_PROBE_ADDR: &str = "8.8.8.8:80";

/// Returned instead of a public IP when the lookup fails.
pub const UNKNOWN: &str = "Unknown";

pub const HTTP_TIMEOUT_SECS: u64 = 5;

/// Addresses printed by `list` unless `--limit` says otherwise.
pub const DEFAULT_LIST_LIMIT: usize = 1024;

/// Refuse command output larger than this many bytes.
pub const MAX_CMD_OUTPUT: usize = 500_000;

/// Runtime settings, defaults overridable through the environment (or `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub public_ip_url: String,
    pub probe_addr: String,
    pub http_timeout: Duration,
    pub list_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_string(),
            probe_addr: DEFAULT_PROBE_ADDR.to_string(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Settings {
    /// Read `SUBNET_INFO_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unparsable numbers keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(url) = lookup("SUBNET_INFO_PUBLIC_IP_URL") {
            settings.public_ip_url = url;
        }
        if let Some(addr) = lookup("SUBNET_INFO_PROBE_ADDR") {
            settings.probe_addr = addr;
        }
        if let Some(secs) = lookup("SUBNET_INFO_HTTP_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => settings.http_timeout = Duration::from_secs(secs),
                Err(e) => log::warn!("Ignoring SUBNET_INFO_HTTP_TIMEOUT_SECS={secs}: {e}"),
            }
        }
        if let Some(limit) = lookup("SUBNET_INFO_LIST_LIMIT") {
            match limit.trim().parse::<usize>() {
                Ok(limit) => settings.list_limit = limit,
                Err(e) => log::warn!("Ignoring SUBNET_INFO_LIST_LIMIT={limit}: {e}"),
            }
        }
        log::debug!("settings: {settings:?}");
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.public_ip_url, "https://api.ipify.org");
        assert_eq!(settings.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SUBNET_INFO_PUBLIC_IP_URL", "http://localhost:8080/ip"),
            ("SUBNET_INFO_PROBE_ADDR", "1.1.1.1:53"),
            ("SUBNET_INFO_HTTP_TIMEOUT_SECS", "2"),
            ("SUBNET_INFO_LIST_LIMIT", "bogus"),
        ]);
        let settings = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(settings.public_ip_url, "http://localhost:8080/ip");
        assert_eq!(settings.probe_addr, "1.1.1.1:53");
        assert_eq!(settings.http_timeout, Duration::from_secs(2));
        assert_eq!(settings.list_limit, DEFAULT_LIST_LIMIT);
    }
}
