use chrono::Local;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slowcheck::report::render_text;
use slowcheck::system::snapshot::rank_processes;
use slowcheck::{DiskUsage, Language, LoadAverage, ProcessUsage, SystemSnapshot, diagnose};
use std::hint::black_box;

const GIB: u64 = 1024 * 1024 * 1024;

fn make_processes(n: usize) -> Vec<ProcessUsage> {
    (0..n)
        .map(|i| ProcessUsage {
            pid: i as u32 + 1,
            name: format!("proc_{i}"),
            cpu_percent: ((i * 37) % 200) as f64,
            memory_percent: ((i * 13) % 100) as f64 / 10.0,
            rss_bytes: ((n - i) as u64 + 1) * 1024 * 1024,
            read_bytes: 0,
            write_bytes: 0,
        })
        .collect()
}

fn make_snapshot(processes: &[ProcessUsage], disks: usize) -> SystemSnapshot {
    let (top_cpu_processes, top_memory_processes) = rank_processes(processes, 5);
    SystemSnapshot {
        timestamp: Local::now(),
        cpu_percent: 91.0,
        load_avg: LoadAverage::new(9.0, 7.5, 6.0),
        cpu_count: 8,
        memory_total: 32 * GIB,
        memory_used: 30 * GIB,
        memory_percent: 93.75,
        swap_total: 8 * GIB,
        swap_used: 4 * GIB,
        swap_percent: 50.0,
        disk_io_read_bytes: 0,
        disk_io_write_bytes: 0,
        battery_percent: Some(12.0),
        power_plugged: Some(false),
        top_cpu_processes,
        top_memory_processes,
        disk_usages: (0..disks)
            .map(|i| DiskUsage {
                mount_point: format!("/mnt/disk{i}"),
                total_gb: 1000.0,
                used_gb: 900.0,
                percent: 90.0,
            })
            .collect(),
    }
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_processes_500_1000_2000");
    for n in [500, 1000, 2000] {
        let processes = make_processes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &processes, |b, procs| {
            b.iter(|| rank_processes(black_box(procs), 5));
        });
    }
    group.finish();
}

fn bench_diagnose(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnose_disks_1_8_32");
    let processes = make_processes(100);
    for disks in [1, 8, 32] {
        let snapshot = make_snapshot(&processes, disks);
        group.bench_with_input(BenchmarkId::from_parameter(disks), &snapshot, |b, s| {
            b.iter(|| diagnose(black_box(s)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let processes = make_processes(100);
    let snapshot = make_snapshot(&processes, 8);
    let bottlenecks = diagnose(&snapshot);
    c.bench_function("render_text_full_report", |b| {
        b.iter(|| render_text(black_box(&snapshot), black_box(&bottlenecks), Language::English));
    });
}

criterion_group!(benches, bench_rank, bench_diagnose, bench_render);
criterion_main!(benches);
