//! Platform measurement probes

use std::net::{IpAddr, ToSocketAddrs};

use battery::State;
use battery::units::ratio::percent;
use battery::units::time::second;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};

use super::config::ReportConfig;
use super::format::{broadcast, format_gigabytes, format_hms, format_percent, netmask};
use super::interface::{fetch_public_ip, scan_ports};
use super::types::{
    BatteryInfo, CpuInfo, InterfaceInfo, MemoryInfo, NetworkAddress, SystemInfo,
};

pub const PUBLIC_IP_UNAVAILABLE: &str = "unavailable";

/// Source of the measurements that make up a report.
pub trait Probe {
    fn battery(&mut self) -> BatteryInfo;
    fn memory(&mut self) -> MemoryInfo;
    fn cpu(&mut self) -> CpuInfo;
    fn networks(&mut self) -> Vec<NetworkAddress>;
    fn system(&mut self) -> SystemInfo;
    fn interface(&mut self) -> InterfaceInfo;
}

/// Probe reading the local machine through `sysinfo` and `battery`.
pub struct HostProbe {
    config: ReportConfig,
    sys: System,
}

impl HostProbe {
    pub fn new(config: ReportConfig) -> Self {
        let refresh = RefreshKind::nothing()
            .with_memory(MemoryRefreshKind::everything())
            .with_cpu(CpuRefreshKind::everything());
        Self {
            config,
            sys: System::new_with_specifics(refresh),
        }
    }

    fn read_battery() -> Result<Option<BatteryInfo>, battery::Error> {
        let manager = battery::Manager::new()?;
        let Some(battery) = manager.batteries()?.next() else {
            return Ok(None);
        };
        let battery = battery?;

        let plugged = match battery.state() {
            State::Charging | State::Full => Some(true),
            State::Discharging | State::Empty => Some(false),
            _ => None,
        };
        let remaining_time = if plugged == Some(true) {
            Some("Unlimited".to_string())
        } else {
            battery
                .time_to_empty()
                .map(|t| format_hms(t.get::<second>().max(0.0) as u64))
        };

        Ok(Some(BatteryInfo {
            ac_plug_in: plugged,
            percentage: Some((battery.state_of_charge().get::<percent>() * 10.0).round() / 10.0),
            remaining_time,
        }))
    }
}

impl Probe for HostProbe {
    fn battery(&mut self) -> BatteryInfo {
        match Self::read_battery() {
            Ok(Some(info)) => info,
            Ok(None) => {
                log::warn!("no battery installed");
                BatteryInfo::default()
            }
            Err(e) => {
                log::warn!("battery information unavailable: {}", e);
                BatteryInfo::default()
            }
        }
    }

    fn memory(&mut self) -> MemoryInfo {
        self.sys.refresh_memory();
        MemoryInfo {
            total: format_gigabytes(self.sys.total_memory()),
            available: format_gigabytes(self.sys.available_memory()),
            used: format_gigabytes(self.sys.used_memory()),
            free: format_gigabytes(self.sys.free_memory()),
        }
    }

    fn cpu(&mut self) -> CpuInfo {
        // Usage is a delta between two refreshes
        self.sys.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        let ram_usage = if total > 0 {
            (total.saturating_sub(self.sys.available_memory())) as f32 / total as f32 * 100.0
        } else {
            0.0
        };

        CpuInfo {
            core: self.sys.cpus().len(),
            ram_usage: format_percent(ram_usage),
            percentage: format_percent(self.sys.global_cpu_usage()),
            main_core: System::physical_core_count(),
        }
    }

    fn networks(&mut self) -> Vec<NetworkAddress> {
        let networks = Networks::new_with_refreshed_list();
        let mut addresses: Vec<NetworkAddress> = networks
            .iter()
            .map(|(name, data)| {
                let ips = data.ip_networks();
                let chosen = ips
                    .iter()
                    .find(|ip| ip.addr.is_ipv4())
                    .or_else(|| ips.first());
                NetworkAddress {
                    key: name.to_string(),
                    address: chosen.map(|ip| ip.addr.to_string()),
                    netmask: chosen.map(|ip| netmask(ip.addr, ip.prefix).to_string()),
                    broadcast: chosen
                        .and_then(|ip| broadcast(ip.addr, ip.prefix))
                        .map(|b| b.to_string()),
                }
            })
            .collect();
        addresses.sort_by(|a, b| a.key.cmp(&b.key));
        addresses
    }

    fn system(&mut self) -> SystemInfo {
        let host = System::host_name().unwrap_or_default();
        let cpu = self
            .sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .unwrap_or_default();
        if cpu.is_empty() {
            log::warn!("CPU info unavailable!");
        }

        SystemInfo {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            release: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
            version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            arch: std::env::consts::ARCH.to_string(),
            host_ip: resolve_host(&host).map(|ip| ip.to_string()),
            host,
            mac_address: first_mac_address(),
            cpu,
        }
    }

    fn interface(&mut self) -> InterfaceInfo {
        log::info!(
            "Checking for open ports in this machine ({})",
            self.config.ports
        );
        let ports_open = scan_ports(self.config.ports);

        let ip_public = if self.config.lookup_public_ip {
            log::info!("Determining public IPv4 address...");
            match fetch_public_ip(&self.config.public_ip_url, self.config.http_timeout) {
                Ok(ip) => ip.to_string(),
                Err(e) => {
                    log::warn!("Public IP unavailable! ({})", e);
                    PUBLIC_IP_UNAVAILABLE.to_string()
                }
            }
        } else {
            PUBLIC_IP_UNAVAILABLE.to_string()
        };

        InterfaceInfo {
            ports_open,
            ip_public,
        }
    }
}

/// First IPv4 address the host name resolves to.
fn resolve_host(host: &str) -> Option<IpAddr> {
    if host.is_empty() {
        return None;
    }
    (host, 0)
        .to_socket_addrs()
        .ok()?
        .map(|addr| addr.ip())
        .find(IpAddr::is_ipv4)
}

/// First non-zero hardware address, by interface name.
fn first_mac_address() -> Option<String> {
    let networks = Networks::new_with_refreshed_list();
    let mut macs: Vec<(String, String)> = networks
        .iter()
        .filter(|(_, data)| data.mac_address().0 != [0u8; 6])
        .map(|(name, data)| (name.to_string(), data.mac_address().to_string()))
        .collect();
    macs.sort();
    macs.into_iter().next().map(|(_, mac)| mac)
}
