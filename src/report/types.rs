//! Serializable report records
//!
//! Field names follow the `sys_info.json` layout consumers already parse,
//! hence the few non-snake-case renames.

use serde::{Deserialize, Serialize};

/// Top-level diagnostic record written to `sys_info.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub name: String,
    pub developer: String,
    pub version: String,
    /// Last path component of `location`
    pub project: String,
    pub location: String,
    /// Local time, `%I:%M:%S %p`
    pub time: String,
    /// Local date, `%Y-%m-%d`
    pub date: String,
    pub data: DiagnosticData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticData {
    pub battery: BatteryInfo,
    pub memory: MemoryInfo,
    pub cpu: CpuInfo,
    pub networks: Vec<NetworkAddress>,
    pub system: SystemInfo,
    pub interface: InterfaceInfo,
}

/// Battery state; every field is null on machines without a battery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryInfo {
    pub ac_plug_in: Option<bool>,
    pub percentage: Option<f32>,
    pub remaining_time: Option<String>,
}

/// Memory figures formatted as `"{:.4} GB"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total: String,
    pub available: String,
    pub used: String,
    pub free: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Logical cores
    pub core: usize,
    #[serde(rename = "ramUsage")]
    pub ram_usage: String,
    pub percentage: String,
    /// Physical cores
    pub main_core: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAddress {
    /// Interface name
    pub key: String,
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "OS")]
    pub os: String,
    pub release: String,
    pub version: String,
    pub arch: String,
    pub host: String,
    pub host_ip: Option<String>,
    pub mac_address: Option<String>,
    pub cpu: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub ports_open: Vec<u16>,
    pub ip_public: String,
}
