//! Local IPv4 address of the outbound interface.

use std::error::Error;
use std::net::{IpAddr, UdpSocket};

/// Address of the interface the OS would use to reach `probe_addr`.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
pub fn local_ip_address(probe_addr: &str) -> Result<String, Box<dyn Error>> {
    let socket =
        UdpSocket::bind("0.0.0.0:0").map_err(|e| format!("Error binding UDP socket: {e}"))?;
    socket
        .connect(probe_addr)
        .map_err(|e| format!("No route towards {probe_addr}: {e}"))?;

    match socket.local_addr()?.ip() {
        IpAddr::V4(ip) if !ip.is_unspecified() => {
            log::debug!("local ip = {ip}");
            Ok(ip.to_string())
        }
        other => Err(format!("Unexpected local address {other}").into()),
    }
}
