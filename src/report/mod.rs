//! System diagnostics report
//!
//! The assembler asks a [`Probe`] for each section in turn and wraps the
//! results with run metadata. [`HostProbe`] measures the local machine;
//! anything else implementing [`Probe`] can stand in for it.
//!
//! # Module Structure
//!
//! - `config` - Port range and lookup settings
//! - `types` - Serializable report records
//! - `probe` - `Probe` trait and the `sysinfo`/`battery` backed implementation
//! - `interface` - Port scan and public IP lookup
//! - `format` - Value formatting (sizes, durations, netmasks)
//! - `writer` - Artifact persistence

mod config;
mod format;
mod interface;
mod probe;
mod types;
mod writer;

use std::path::{Component, Path};

use chrono::{DateTime, Local};

pub use config::{DEFAULT_PUBLIC_IP_URL, PortRange, ReportConfig};
pub use format::{format_gigabytes, format_hms};
pub use interface::{fetch_public_ip, port_in_use, scan_ports};
pub use probe::{HostProbe, PUBLIC_IP_UNAVAILABLE, Probe};
pub use types::{
    BatteryInfo, CpuInfo, DiagnosticData, DiagnosticReport, InterfaceInfo, MemoryInfo,
    NetworkAddress, SystemInfo,
};
pub use writer::{
    ArtifactPaths, REPORT_FILE_NAME, TREE_FILE_NAME, run_dir_name, save_artifacts, to_pretty_json,
};

pub const REPORT_NAME: &str = "Diagnostic results by servdiag";

/// Last directory name of `location` once `.` and `..` are resolved.
fn project_name(location: &Path) -> String {
    let mut names = Vec::new();
    for component in location.components() {
        match component {
            Component::Normal(name) => names.push(name),
            Component::ParentDir => {
                names.pop();
            }
            _ => {}
        }
    }
    names
        .last()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Collect every section from `probe` and stamp the record with `now`.
pub fn assemble<P: Probe + ?Sized>(
    probe: &mut P,
    location: &Path,
    now: &DateTime<Local>,
) -> DiagnosticReport {
    log::info!("Gathering battery information...");
    let battery = probe.battery();
    log::info!("Gathering memory information...");
    let memory = probe.memory();
    log::info!("Gathering CPU information...");
    let cpu = probe.cpu();
    log::info!("Gathering networking information...");
    let networks = probe.networks();
    log::info!("Gathering platform information...");
    let system = probe.system();
    log::info!("Gathering interfacing information...");
    let interface = probe.interface();

    DiagnosticReport {
        name: REPORT_NAME.to_string(),
        developer: env!("CARGO_PKG_AUTHORS").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        project: project_name(location),
        location: location.to_string_lossy().to_string(),
        time: now.format("%I:%M:%S %p").to_string(),
        date: now.format("%Y-%m-%d").to_string(),
        data: DiagnosticData {
            battery,
            memory,
            cpu,
            networks,
            system,
            interface,
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::TimeZone;

    use super::*;

    /// Probe returning canned values.
    pub(crate) struct FixedProbe {
        pub calls: Vec<&'static str>,
    }

    impl Probe for FixedProbe {
        fn battery(&mut self) -> BatteryInfo {
            self.calls.push("battery");
            BatteryInfo::default()
        }

        fn memory(&mut self) -> MemoryInfo {
            self.calls.push("memory");
            MemoryInfo {
                total: format_gigabytes(16 * 1024 * 1024 * 1024),
                available: format_gigabytes(8 * 1024 * 1024 * 1024),
                used: format_gigabytes(6 * 1024 * 1024 * 1024),
                free: format_gigabytes(2 * 1024 * 1024 * 1024),
            }
        }

        fn cpu(&mut self) -> CpuInfo {
            self.calls.push("cpu");
            CpuInfo {
                core: 8,
                ram_usage: "50.0%".to_string(),
                percentage: "12.5%".to_string(),
                main_core: Some(4),
            }
        }

        fn networks(&mut self) -> Vec<NetworkAddress> {
            self.calls.push("networks");
            vec![NetworkAddress {
                key: "lo".to_string(),
                address: Some("127.0.0.1".to_string()),
                netmask: Some("255.0.0.0".to_string()),
                broadcast: Some("127.255.255.255".to_string()),
            }]
        }

        fn system(&mut self) -> SystemInfo {
            self.calls.push("system");
            SystemInfo {
                os: "Linux".to_string(),
                release: "6.1.0".to_string(),
                version: "12".to_string(),
                arch: "x86_64".to_string(),
                host: "buildbox".to_string(),
                host_ip: Some("10.0.0.2".to_string()),
                mac_address: Some("02:42:ac:11:00:02".to_string()),
                cpu: "Test CPU".to_string(),
            }
        }

        fn interface(&mut self) -> InterfaceInfo {
            self.calls.push("interface");
            InterfaceInfo {
                ports_open: vec![3000, 8080],
                ip_public: PUBLIC_IP_UNAVAILABLE.to_string(),
            }
        }
    }

    pub(crate) fn sample_report() -> DiagnosticReport {
        let mut probe = FixedProbe { calls: Vec::new() };
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assemble(&mut probe, Path::new("/srv/projects/webapp"), &now)
    }

    #[test]
    fn test_sections_collected_in_order() {
        let mut probe = FixedProbe { calls: Vec::new() };
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assemble(&mut probe, Path::new("/tmp/x"), &now);
        assert_eq!(
            probe.calls,
            vec!["battery", "memory", "cpu", "networks", "system", "interface"]
        );
    }

    #[test]
    fn test_project_name_resolves_relative_components() {
        let mut probe = FixedProbe { calls: Vec::new() };
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let report = assemble(&mut probe, Path::new("/srv/webapp/sub/.."), &now);
        assert_eq!(report.project, "webapp");

        let report = assemble(&mut probe, Path::new("/srv/webapp/."), &now);
        assert_eq!(report.project, "webapp");

        let report = assemble(&mut probe, Path::new("/"), &now);
        assert_eq!(report.project, "");
    }

    #[test]
    fn test_run_metadata() {
        let report = sample_report();
        assert_eq!(report.name, REPORT_NAME);
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.project, "webapp");
        assert_eq!(report.location, "/srv/projects/webapp");
        assert_eq!(report.time, "02:05:07 PM");
        assert_eq!(report.date, "2024-03-09");
    }

    #[test]
    fn test_json_layout() {
        let value = serde_json::to_value(sample_report()).unwrap();
        let top = value.as_object().unwrap();
        let mut keys: Vec<_> = top.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["data", "date", "developer", "location", "name", "project", "time", "version"]
        );

        let data = top["data"].as_object().unwrap();
        let mut data_keys: Vec<_> = data.keys().map(String::as_str).collect();
        data_keys.sort();
        assert_eq!(
            data_keys,
            vec!["battery", "cpu", "interface", "memory", "networks", "system"]
        );

        assert!(data["battery"]["ac_plug_in"].is_null());
        assert_eq!(data["cpu"]["ramUsage"], "50.0%");
        assert_eq!(data["system"]["OS"], "Linux");
        assert_eq!(data["memory"]["total"], "16.0000 GB");
        assert_eq!(data["networks"][0]["key"], "lo");
        assert_eq!(data["interface"]["ports_open"][1], 8080);
    }
}
