use chrono::{DateTime, Local};
use serde::Serialize;

use super::process::{ProcessUsage, top_by};

/// 1, 5 and 15 minute load averages. Zero-filled where the OS has none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(into = "[f64; 3]")]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadAverage {
    pub fn new(one: f64, five: f64, fifteen: f64) -> Self {
        Self { one, five, fifteen }
    }
}

impl From<LoadAverage> for [f64; 3] {
    fn from(load: LoadAverage) -> Self {
        [load.one, load.five, load.fifteen]
    }
}

/// One mounted, writable filesystem.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiskUsage {
    pub mount_point: String,
    pub total_gb: f64,
    pub used_gb: f64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemSnapshot {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f64,
    pub load_avg: LoadAverage,
    pub cpu_count: usize,
    pub memory_total: u64,
    pub memory_used: u64,
    pub memory_percent: f64,
    pub swap_total: u64,
    pub swap_used: u64,
    pub swap_percent: f64,
    pub disk_io_read_bytes: u64,
    pub disk_io_write_bytes: u64,
    /// `None` on machines without a battery.
    pub battery_percent: Option<f64>,
    pub power_plugged: Option<bool>,
    pub top_cpu_processes: Vec<ProcessUsage>,
    pub top_memory_processes: Vec<ProcessUsage>,
    pub disk_usages: Vec<DiskUsage>,
}

/// Split a flat process list into the top-N CPU and top-N memory consumers,
/// each sorted highest first.
pub fn rank_processes(
    processes: &[ProcessUsage],
    top_n: usize,
) -> (Vec<ProcessUsage>, Vec<ProcessUsage>) {
    (
        top_by(processes, top_n, |p| p.cpu_percent),
        top_by(processes, top_n, |p| p.memory_percent),
    )
}

/// Bytes to GiB rounded to two decimals, as reported in `DiskUsage`.
pub fn bytes_to_gib_2dp(bytes: u64) -> f64 {
    (bytes as f64 / GIB * 100.0).round() / 100.0
}

/// `part / total` as a percentage, zero when `total` is zero.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
