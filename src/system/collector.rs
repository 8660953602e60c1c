use std::time::Duration;

use chrono::Local;
use sysinfo::{Disks, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::{debug, trace};

use super::platform;
use super::process::ProcessUsage;
use super::snapshot::{
    DiskUsage, LoadAverage, SystemSnapshot, bytes_to_gib_2dp, percent_of, rank_processes,
};

/// Anything able to produce a complete snapshot of the current machine.
#[allow(async_fn_in_trait)]
pub trait SnapshotProvider {
    async fn snapshot(&mut self, top_n: usize) -> SystemSnapshot;
}

#[derive(Clone, Copy, Debug)]
pub struct SampleIntervals {
    /// Gap between the two CPU readings used for the aggregate percentage.
    pub cpu: Duration,
    /// Gap between the two process readings used for per-process CPU.
    pub process: Duration,
}

impl Default for SampleIntervals {
    fn default() -> Self {
        Self {
            cpu: Duration::from_millis(300),
            process: Duration::from_millis(100),
        }
    }
}

pub struct Collector {
    sys: System,
    disks: Disks,
    intervals: SampleIntervals,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(SampleIntervals::default())
    }
}

impl Collector {
    pub fn new(intervals: SampleIntervals) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            intervals: SampleIntervals {
                cpu: intervals.cpu.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
                process: intervals.process,
            },
        }
    }

    #[tracing::instrument(name = "collector.collect", level = "debug", skip(self))]
    pub async fn collect(&mut self, top_n: usize) -> SystemSnapshot {
        // CPU usage is a delta between two refreshes.
        self.sys.refresh_cpu_all();
        tokio::time::sleep(self.intervals.cpu).await;
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let kind = ProcessRefreshKind::nothing()
            .with_cpu()
            .with_memory()
            .with_disk_usage();
        self.sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        tokio::time::sleep(self.intervals.process).await;
        let alive = self
            .sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        debug!(processes = alive, "refreshed process table");

        self.disks.refresh(true);

        self.build_snapshot(top_n)
    }

    fn build_snapshot(&self, top_n: usize) -> SystemSnapshot {
        let memory_total = self.sys.total_memory();
        let memory_used = self.sys.used_memory();
        let swap_total = self.sys.total_swap();
        let swap_used = self.sys.used_swap();

        let processes = self.process_usages(memory_total);
        let (top_cpu_processes, top_memory_processes) = rank_processes(&processes, top_n);

        let (disk_usages, disk_io_read_bytes, disk_io_write_bytes) = self.disk_usages();

        let load = System::load_average();
        let battery = platform::battery();
        if battery.is_none() {
            debug!("no battery data");
        }

        SystemSnapshot {
            timestamp: Local::now(),
            cpu_percent: f64::from(self.sys.global_cpu_usage()),
            load_avg: LoadAverage::new(load.one, load.five, load.fifteen),
            cpu_count: self.sys.cpus().len(),
            memory_total,
            memory_used,
            memory_percent: percent_of(memory_used, memory_total),
            swap_total,
            swap_used,
            swap_percent: percent_of(swap_used, swap_total),
            disk_io_read_bytes,
            disk_io_write_bytes,
            battery_percent: battery.map(|b| b.percent),
            power_plugged: battery.and_then(|b| b.power_plugged),
            top_cpu_processes,
            top_memory_processes,
            disk_usages,
        }
    }

    fn process_usages(&self, memory_total: u64) -> Vec<ProcessUsage> {
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let io = process.disk_usage();
                ProcessUsage {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().to_string(),
                    cpu_percent: f64::from(process.cpu_usage()),
                    memory_percent: percent_of(process.memory(), memory_total),
                    rss_bytes: process.memory(),
                    read_bytes: io.total_read_bytes,
                    write_bytes: io.total_written_bytes,
                }
            })
            .collect()
    }

    /// Writable mounts plus cumulative read/write bytes across all disks.
    fn disk_usages(&self) -> (Vec<DiskUsage>, u64, u64) {
        let mut usages = Vec::new();
        let mut read_bytes = 0u64;
        let mut write_bytes = 0u64;

        for disk in self.disks.list() {
            let io = disk.usage();
            read_bytes = read_bytes.saturating_add(io.total_read_bytes);
            write_bytes = write_bytes.saturating_add(io.total_written_bytes);

            let mount_point = disk.mount_point().to_string_lossy().to_string();
            if disk.is_read_only() {
                trace!(%mount_point, "skipping read-only mount");
                continue;
            }
            let total = disk.total_space();
            if total == 0 {
                trace!(%mount_point, "skipping zero-capacity mount");
                continue;
            }
            let used = total.saturating_sub(disk.available_space());
            usages.push(DiskUsage {
                mount_point,
                total_gb: bytes_to_gib_2dp(total),
                used_gb: bytes_to_gib_2dp(used),
                percent: percent_of(used, total),
            });
        }

        (usages, read_bytes, write_bytes)
    }
}

impl SnapshotProvider for Collector {
    async fn snapshot(&mut self, top_n: usize) -> SystemSnapshot {
        self.collect(top_n).await
    }
}
