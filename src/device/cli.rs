//! Shell command execution.
//!
//! Runs the platform network-configuration command and returns its output.

use crate::config;
use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]+)\s*"#).expect("Invalid Regex")
    })
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command is empty, cannot start, exits non-zero or
///   produces more than [`config::MAX_CMD_OUTPUT`] bytes
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds
        .split_first()
        .ok_or_else(|| format!("Empty command: '{cmd}'"))?;

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        format!("Failed to execute command '{cmd}': {e}")
    })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > config::MAX_CMD_OUTPUT {
            return Err(format!(
                "Response too large: {} bytes for command: {:?}",
                output.stdout.len(),
                cmds
            )
            .into());
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    // ipconfig on Windows may emit a non-UTF-8 code page
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_and_strip("ifconfig"), vec!["ifconfig"]);
        assert_eq!(split_and_strip("ip -4 addr show"), vec!["ip", "-4", "addr", "show"]);
    }

    #[test]
    fn test_split_quoted() {
        let input = "netsh interface 'ip show' \"config name\"";
        assert_eq!(
            split_and_strip(input),
            vec!["netsh", "interface", "ip show", "config name"]
        );
    }

    #[test]
    fn test_split_empty_quotes() {
        assert_eq!(split_and_strip("echo '' x"), vec!["echo", "", "x"]);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(run("   ").is_err());
    }

    #[test]
    fn test_run_missing_program() {
        let err = run("definitely-not-a-real-program-4711").unwrap_err();
        assert!(err.to_string().contains("Failed to execute command"));
    }
}
