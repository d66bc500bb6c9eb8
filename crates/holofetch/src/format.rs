//! Turns [`HostInfo`] into dashboard sections.

use std::time::Duration;

use holofetch_core::Section;
use holofetch_core::ansi::FG_BRIGHT_GREEN;
use holofetch_core::ansi::FG_BRIGHT_RED;
use holofetch_core::ansi::FG_BRIGHT_YELLOW;
use holofetch_core::ansi::RESET;

use crate::info::HostInfo;
use crate::info::Usage;

const BYTES_PER_GB: f64 = 1_000_000_000.0;
/// Sizes above this many GB are shown in TB.
const TB_THRESHOLD_GB: f64 = 100.0;

pub fn percent_color(percent: u64) -> &'static str {
    if percent > 90 {
        FG_BRIGHT_RED
    } else if percent > 80 {
        FG_BRIGHT_YELLOW
    } else {
        FG_BRIGHT_GREEN
    }
}

fn percent_tag(percent: u64, color: bool) -> String {
    if color {
        format!("[ {}{percent}%{RESET} ]", percent_color(percent))
    } else {
        format!("[ {percent}% ]")
    }
}

fn gigabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Size in GB, or TB once above 100 GB.
pub fn scale_size(bytes: u64) -> (f64, &'static str) {
    let gb = gigabytes(bytes);
    if gb > TB_THRESHOLD_GB {
        (gb / 1000.0, "TB")
    } else {
        (gb, "GB")
    }
}

pub fn format_memory(usage: &Usage, color: bool) -> String {
    format!(
        "{:.2} GB / {:.2} GB {}",
        gigabytes(usage.used_bytes),
        gigabytes(usage.total_bytes),
        percent_tag(usage.percent(), color)
    )
}

pub fn format_disk(usage: &Usage, color: bool) -> String {
    let (used, used_unit) = scale_size(usage.used_bytes);
    let (total, total_unit) = scale_size(usage.total_bytes);
    format!(
        "{used:.2} {used_unit} / {total:.2} {total_unit} {}",
        percent_tag(usage.percent(), color)
    )
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let ms = uptime.subsec_millis();
    format!(
        "{}D {:02}h:{:02}m:{:02}s.{:03}ms",
        secs / 86_400,
        secs / 3_600 % 24,
        secs / 60 % 60,
        secs % 60,
        ms
    )
}

/// Sections in display order. Sections without properties are dropped.
pub fn build_sections(info: &HostInfo, color: bool) -> Vec<Section> {
    let mut sections = Vec::new();

    let cpu = match (info.cpu.as_str(), info.cpu_threads) {
        ("", _) => "Unknown".to_string(),
        (brand, 0) => brand.to_string(),
        (brand, threads) => format!("{brand} ({threads} threads)"),
    };
    sections.push(
        Section::new("Hardware")
            .with_property("CPU", cpu)
            .with_property("RAM", format_memory(&info.memory, color))
            .with_property("Swap", format_memory(&info.swap, color)),
    );

    let mut disks = Section::new("Disks");
    for disk in &info.disks {
        disks.push(disk.mount_point.clone(), format_disk(&disk.usage, color));
    }
    sections.push(disks);

    for adapter in &info.adapters {
        let mut section = Section::new("Network Adapter")
            .with_property("Name", adapter.name.clone())
            .with_property("MAC", adapter.mac.clone());
        for addr in adapter.ipv4.iter().filter(|a| !a.is_empty()) {
            section.push("IPv4", addr.clone());
        }
        for addr in adapter.ipv6.iter().filter(|a| !a.is_empty()) {
            section.push("IPv6", addr.clone());
        }
        sections.push(section);
    }

    let mut software = Section::new("Software").with_property("OS", info.os.clone());
    for (label, version) in &info.tools {
        software.push(label.clone(), version.clone());
    }
    sections.push(software);

    sections.push(
        Section::new("Terminal")
            .with_property("Tab", info.terminal.clone())
            .with_property("Host", info.host.clone())
            .with_property("User", info.user.clone())
            .with_property("Up", format_uptime(info.uptime)),
    );

    sections.retain(|section| !section.is_empty());
    sections
}
