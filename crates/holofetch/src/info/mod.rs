//! Host facts gathered for the dashboard.

pub mod tools;

use std::net::IpAddr;
use std::time::Duration;

use sysinfo::Disks;
use sysinfo::Networks;
use sysinfo::System;
use tracing::debug;
use tracing::warn;

const UNSPECIFIED_MAC: &str = "00:00:00:00:00:00";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl Usage {
    pub fn new(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used_bytes,
            total_bytes,
        }
    }

    /// Whole percent used, 0 when the total is unknown.
    pub fn percent(&self) -> u64 {
        if self.total_bytes == 0 {
            return 0;
        }
        (u128::from(self.used_bytes) * 100 / u128::from(self.total_bytes)) as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskInfo {
    pub mount_point: String,
    pub usage: Usage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterInfo {
    pub name: String,
    pub mac: String,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub cpu: String,
    pub cpu_threads: usize,
    pub memory: Usage,
    pub swap: Usage,
    pub disks: Vec<DiskInfo>,
    pub adapters: Vec<AdapterInfo>,
    pub os: String,
    /// `(label, version)` of detected developer tools.
    pub tools: Vec<(String, String)>,
    pub terminal: String,
    pub host: String,
    pub user: String,
    pub uptime: Duration,
}

impl HostInfo {
    /// Queries the running system. Facts that cannot be read are left empty.
    pub fn query() -> Self {
        let mut system = System::new();
        system.refresh_cpu_all();
        system.refresh_memory();

        let cpu = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();
        if cpu.is_empty() {
            warn!("CPU brand not available");
        }

        let info = Self {
            cpu,
            cpu_threads: system.cpus().len(),
            memory: Usage::new(system.used_memory(), system.total_memory()),
            swap: Usage::new(system.used_swap(), system.total_swap()),
            disks: query_disks(),
            adapters: query_adapters(),
            os: System::long_os_version()
                .or_else(System::name)
                .unwrap_or_default(),
            tools: tools::detect_tools(),
            terminal: env_first(&["TERM_PROGRAM", "TERM"]),
            host: System::host_name().unwrap_or_default(),
            user: env_first(&["USER", "USERNAME"]),
            uptime: Duration::from_secs(System::uptime()),
        };
        debug!(
            disks = info.disks.len(),
            adapters = info.adapters.len(),
            tools = info.tools.len(),
            "Host info gathered"
        );
        info
    }
}

fn query_disks() -> Vec<DiskInfo> {
    let disks = Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter(|disk| disk.total_space() > 0)
        .map(|disk| DiskInfo {
            mount_point: disk.mount_point().display().to_string(),
            usage: Usage::new(
                disk.total_space().saturating_sub(disk.available_space()),
                disk.total_space(),
            ),
        })
        .collect()
}

fn query_adapters() -> Vec<AdapterInfo> {
    let networks = Networks::new_with_refreshed_list();
    let mut adapters: Vec<AdapterInfo> = networks
        .list()
        .iter()
        .map(|(name, data)| {
            let addrs: Vec<IpAddr> = data.ip_networks().iter().map(|net| net.addr).collect();
            adapter_info(name, &data.mac_address().to_string(), &addrs)
        })
        .filter(is_reportable)
        .collect();
    adapters.sort_by(|a, b| a.name.cmp(&b.name));
    adapters
}

fn adapter_info(name: &str, mac: &str, addrs: &[IpAddr]) -> AdapterInfo {
    let mut adapter = AdapterInfo {
        name: name.to_string(),
        mac: mac.to_string(),
        ..AdapterInfo::default()
    };
    for addr in addrs {
        match addr {
            IpAddr::V4(v4) => adapter.ipv4.push(v4.to_string()),
            IpAddr::V6(v6) => adapter.ipv6.push(v6.to_string()),
        }
    }
    adapter
}

/// Skips loopback-style interfaces: no hardware address and no address
/// other than loopback.
fn is_reportable(adapter: &AdapterInfo) -> bool {
    if adapter.mac != UNSPECIFIED_MAC {
        return true;
    }
    adapter
        .ipv4
        .iter()
        .chain(&adapter.ipv6)
        .filter_map(|addr| addr.parse::<IpAddr>().ok())
        .any(|addr| !addr.is_loopback())
}

fn env_first(names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
