//! Port scanning and public IP lookup

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, TcpListener};
use std::time::Duration;

use super::config::PortRange;

/// Check if a loopback port is already taken by another listener.
pub fn port_in_use(port: u16, check_ipv6: bool) -> bool {
    if TcpListener::bind((Ipv4Addr::LOCALHOST, port)).is_err() {
        return true;
    }
    check_ipv6 && TcpListener::bind((Ipv6Addr::LOCALHOST, port)).is_err()
}

/// Hosts without an IPv6 loopback would otherwise report every port as taken.
fn ipv6_loopback_available() -> bool {
    TcpListener::bind((Ipv6Addr::LOCALHOST, 0)).is_ok()
}

/// Ports in `range` that cannot be bound on loopback.
pub fn scan_ports(range: PortRange) -> Vec<u16> {
    let check_ipv6 = ipv6_loopback_available();
    if !check_ipv6 {
        log::debug!("IPv6 loopback unavailable, checking IPv4 only");
    }
    range
        .iter()
        .filter(|&port| port_in_use(port, check_ipv6))
        .collect()
}

/// Fetch this machine's public IP from a plain-text echo service.
pub fn fetch_public_ip(url: &str, timeout: Duration) -> Result<IpAddr, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("servdiag/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| e.to_string())?;

    let body = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(|e| e.to_string())?;

    body.trim()
        .parse()
        .map_err(|_| format!("unexpected response from {}: {:?}", url, body.trim()))
}
