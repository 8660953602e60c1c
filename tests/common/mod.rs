#![allow(dead_code)]

use chrono::{Local, TimeZone};
use slowcheck::{DiskUsage, LoadAverage, ProcessUsage, SystemSnapshot};

pub const GIB: u64 = 1024 * 1024 * 1024;

pub fn healthy_snapshot() -> SystemSnapshot {
    SystemSnapshot {
        timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        cpu_percent: 20.0,
        load_avg: LoadAverage::new(0.5, 0.5, 0.5),
        cpu_count: 8,
        memory_total: 32 * GIB,
        memory_used: 8 * GIB,
        memory_percent: 40.0,
        swap_total: 16 * GIB,
        swap_used: 0,
        swap_percent: 0.0,
        disk_io_read_bytes: 0,
        disk_io_write_bytes: 0,
        battery_percent: None,
        power_plugged: None,
        top_cpu_processes: Vec::new(),
        top_memory_processes: Vec::new(),
        disk_usages: Vec::new(),
    }
}

pub fn process(pid: u32, name: &str, cpu: f64, mem: f64, rss_bytes: u64) -> ProcessUsage {
    ProcessUsage {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        memory_percent: mem,
        rss_bytes,
        read_bytes: 4096,
        write_bytes: 1024,
    }
}

pub fn disk(mount: &str, total_gb: f64, used_gb: f64, percent: f64) -> DiskUsage {
    DiskUsage {
        mount_point: mount.to_string(),
        total_gb,
        used_gb,
        percent,
    }
}

/// Laptop in trouble: every rule fires.
pub fn struggling_laptop() -> SystemSnapshot {
    let mut s = healthy_snapshot();
    s.cpu_percent = 92.0;
    s.load_avg = LoadAverage::new(6.0, 3.2, 2.1);
    s.cpu_count = 4;
    s.memory_total = 32 * GIB;
    s.memory_used = 29 * GIB;
    s.memory_percent = 90.0;
    s.swap_used = 8 * GIB;
    s.swap_percent = 50.0;
    s.battery_percent = Some(15.0);
    s.power_plugged = Some(false);
    s.top_cpu_processes = vec![
        process(4242, "heavy-task", 140.0, 10.0, 3 * GIB),
        process(77, "browser", 35.0, 22.0, 7 * GIB),
    ];
    s.top_memory_processes = vec![
        process(77, "browser", 35.0, 22.0, 7 * GIB),
        process(4242, "heavy-task", 140.0, 10.0, 3 * GIB),
    ];
    s.disk_usages = vec![disk("/", 500.0, 460.0, 92.0), disk("/boot", 1.0, 0.2, 20.0)];
    s
}
