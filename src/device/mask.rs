//! Locally configured subnet mask, read from `ifconfig` / `ipconfig`.

use super::cli;
use crate::calculator::parse_mask;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Lines after the address line that may still carry its mask (Windows
/// prints the mask on the line below the address).
const MASK_LOOKAHEAD_LINES: usize = 2;

static ADDR_REGEX: OnceLock<Regex> = OnceLock::new();
static MASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_addr_regex() -> &'static Regex {
    ADDR_REGEX.get_or_init(|| Regex::new(r"\d{1,3}(?:\.\d{1,3}){3}").expect("Invalid Regex"))
}

fn get_mask_regex() -> &'static Regex {
    MASK_REGEX.get_or_init(|| {
        Regex::new(r"(?i)mask[^0-9]*?(0x[0-9a-f]{8}|\d{1,3}(?:\.\d{1,3}){3})")
            .expect("Invalid Regex")
    })
}

/// Network configuration command for the current platform.
pub fn mask_command() -> &'static str {
    if cfg!(windows) {
        "ipconfig"
    } else {
        "ifconfig"
    }
}

/// Query the platform command and extract the mask configured for `local_ip`.
pub fn local_subnet_mask(local_ip: &str) -> Result<String, Box<dyn Error>> {
    let output = cli::run(mask_command())?;
    parse_subnet_mask(&output, local_ip)
}

/// Extract the subnet mask belonging to `local_ip` from `ifconfig`/`ipconfig` output.
///
/// Looks for the first line holding `local_ip` as a whole address, then for a
/// `netmask`/`Mask` token on that line or the next
/// [`MASK_LOOKAHEAD_LINES`] lines of the same interface block. BSD style hex
/// masks (`0xffffff00`) are returned in dotted-decimal form.
pub fn parse_subnet_mask(output: &str, local_ip: &str) -> Result<String, Box<dyn Error>> {
    let lines: Vec<&str> = output.lines().collect();
    let pos = lines
        .iter()
        .position(|line| line_has_addr(line, local_ip))
        .ok_or_else(|| format!("Local IP {local_ip} not found in network configuration"))?;
    log::trace!("address line: {}", lines[pos]);

    // Following lines only count while they still belong to the same
    // interface block: indented and not blank.
    let following = lines[pos + 1..]
        .iter()
        .take(MASK_LOOKAHEAD_LINES)
        .take_while(|line| line.starts_with(char::is_whitespace) && !line.trim().is_empty());

    let token = std::iter::once(&lines[pos])
        .chain(following)
        .find_map(|line| get_mask_regex().captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| format!("No subnet mask listed next to {local_ip}"))?;

    let mask = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => {
            let bits = u32::from_str_radix(hex, 16)
                .map_err(|e| format!("Invalid hex netmask {token}: {e}"))?;
            Ipv4Addr::from(bits).to_string()
        }
        None => token.to_string(),
    };
    parse_mask(&mask)?;
    log::debug!("subnet mask for {local_ip}: {mask}");
    Ok(mask)
}

fn line_has_addr(line: &str, addr: &str) -> bool {
    get_addr_regex().find_iter(line).any(|m| m.as_str() == addr)
}
