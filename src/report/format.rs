//! Formatting helpers for report values

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a byte count as gibibytes with four decimals, e.g. `"15.5000 GB"`.
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.4} GB", bytes as f64 / GIB)
}

/// Format a percentage, e.g. `"42.5%"`.
pub fn format_percent(value: f32) -> String {
    format!("{:.1}%", value)
}

/// Format seconds as `"H:MM:SS (H:M:S)"`.
pub fn format_hms(secs: u64) -> String {
    let (mm, ss) = (secs / 60, secs % 60);
    let (hh, mm) = (mm / 60, mm % 60);
    format!("{}:{:02}:{:02} (H:M:S)", hh, mm, ss)
}

/// Network mask for an address with the given prefix length.
pub fn netmask(addr: IpAddr, prefix: u8) -> IpAddr {
    match addr {
        IpAddr::V4(_) => {
            let prefix = u32::from(prefix.min(32));
            let bits = if prefix == 0 {
                0
            } else {
                u32::MAX << (32 - prefix)
            };
            IpAddr::V4(Ipv4Addr::from(bits))
        }
        IpAddr::V6(_) => {
            let prefix = u32::from(prefix.min(128));
            let bits = if prefix == 0 {
                0
            } else {
                u128::MAX << (128 - prefix)
            };
            IpAddr::V6(Ipv6Addr::from(bits))
        }
    }
}

/// Broadcast address; IPv6 has none.
pub fn broadcast(addr: IpAddr, prefix: u8) -> Option<IpAddr> {
    match (addr, netmask(addr, prefix)) {
        (IpAddr::V4(a), IpAddr::V4(mask)) => {
            Some(IpAddr::V4(Ipv4Addr::from(u32::from(a) | !u32::from(mask))))
        }
        _ => None,
    }
}
