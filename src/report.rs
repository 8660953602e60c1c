//! Text and JSON renderings of a snapshot and its diagnosis.

use serde::Serialize;

use crate::diagnostics::{Bottleneck, Language};
use crate::format::{format_bytes, render_table};
use crate::system::process::ProcessUsage;
use crate::system::snapshot::{DiskUsage, SystemSnapshot};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

struct Labels {
    time: &'static str,
    cpu: &'static str,
    load: &'static str,
    cores: &'static str,
    memory: &'static str,
    used: &'static str,
    swap: &'static str,
    disks: &'static str,
    battery: &'static str,
    plugged_in: &'static str,
    on_battery: &'static str,
    power_unknown: &'static str,
    top_cpu: &'static str,
    top_memory: &'static str,
    process_headers: [&'static str; 5],
    disk_headers: [&'static str; 3],
    no_processes: &'static str,
    no_disks: &'static str,
    bottleneck_headers: [&'static str; 4],
    bottlenecks_heading: &'static str,
    all_clear: &'static str,
}

const ENGLISH: Labels = Labels {
    time: "Time",
    cpu: "CPU",
    load: "Load (1/5/15)",
    cores: "Cores",
    memory: "Memory",
    used: "Used",
    swap: "Swap",
    disks: "Disks:",
    battery: "Battery",
    plugged_in: "plugged in",
    on_battery: "on battery",
    power_unknown: "power source unknown",
    top_cpu: "Top CPU:",
    top_memory: "Top memory:",
    process_headers: ["PID", "Process", "CPU", "Memory", "RSS"],
    disk_headers: ["Mount", "Used / Total", "Usage"],
    no_processes: "No process data",
    no_disks: "No disk data",
    bottleneck_headers: ["Problem", "Cause", "Evidence", "Solutions"],
    bottlenecks_heading: "Possible bottlenecks:",
    all_clear: "No obvious bottleneck found, performance looks normal.",
};

const CHINESE: Labels = Labels {
    time: "时间",
    cpu: "CPU",
    load: "负载 (1/5/15)",
    cores: "核心",
    memory: "内存",
    used: "已用",
    swap: "Swap",
    disks: "磁盘：",
    battery: "电池",
    plugged_in: "已连接电源",
    on_battery: "使用电池",
    power_unknown: "电源状态未知",
    top_cpu: "CPU 占用 Top：",
    top_memory: "内存占用 Top：",
    process_headers: ["PID", "进程", "CPU", "内存", "常驻内存"],
    disk_headers: ["挂载点", "已用 / 总计", "占用"],
    no_processes: "无进程数据",
    no_disks: "无磁盘数据",
    bottleneck_headers: ["问题", "原因", "证据", "解决方案"],
    bottlenecks_heading: "可能的瓶颈：",
    all_clear: "未发现明显瓶颈，性能正常。",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Chinese => &CHINESE,
    }
}

fn separator(language: Language) -> &'static str {
    match language {
        Language::English => ": ",
        Language::Chinese => "：",
    }
}

pub fn format_process_table(processes: &[ProcessUsage], language: Language) -> String {
    let l = labels(language);
    if processes.is_empty() {
        return l.no_processes.to_string();
    }
    let rows: Vec<Vec<String>> = processes
        .iter()
        .map(|p| {
            vec![
                p.pid.to_string(),
                p.name.clone(),
                format!("{:.0}%", p.cpu_percent),
                format!("{:.0}%", p.memory_percent),
                format_bytes(p.rss_bytes),
            ]
        })
        .collect();
    render_table(&l.process_headers, &rows)
}

pub fn format_disk_table(disks: &[DiskUsage], language: Language) -> String {
    let l = labels(language);
    if disks.is_empty() {
        return l.no_disks.to_string();
    }
    let rows: Vec<Vec<String>> = disks
        .iter()
        .map(|d| {
            vec![
                d.mount_point.clone(),
                format!("{:.1} / {:.1} GiB", d.used_gb, d.total_gb),
                format!("{:.0}%", d.percent),
            ]
        })
        .collect();
    render_table(&l.disk_headers, &rows)
}

pub fn format_snapshot(snapshot: &SystemSnapshot, language: Language) -> String {
    let l = labels(language);
    let sep = separator(language);
    let load = snapshot.load_avg;

    let mut lines = vec![
        format!("{}{sep}{}", l.time, snapshot.timestamp.format("%Y-%m-%d %H:%M:%S")),
        format!(
            "{}{sep}{:.0}% | {}{sep}{:.2} / {:.2} / {:.2} | {}{sep}{}",
            l.cpu,
            snapshot.cpu_percent,
            l.load,
            load.one,
            load.five,
            load.fifteen,
            l.cores,
            snapshot.cpu_count
        ),
        format!(
            "{}{sep}{:.0}% | {} {} / {}",
            l.memory,
            snapshot.memory_percent,
            l.used,
            format_bytes(snapshot.memory_used),
            format_bytes(snapshot.memory_total)
        ),
        format!(
            "{}{sep}{:.0}% | {} {} / {}",
            l.swap,
            snapshot.swap_percent,
            l.used,
            format_bytes(snapshot.swap_used),
            format_bytes(snapshot.swap_total)
        ),
    ];

    if let Some(percent) = snapshot.battery_percent {
        let source = match snapshot.power_plugged {
            Some(true) => l.plugged_in,
            Some(false) => l.on_battery,
            None => l.power_unknown,
        };
        lines.push(format!("{}{sep}{percent:.0}% ({source})", l.battery));
    }
    if !snapshot.disk_usages.is_empty() {
        lines.push(l.disks.to_string());
        lines.push(format_disk_table(&snapshot.disk_usages, language));
    }
    lines.push(l.top_cpu.to_string());
    lines.push(format_process_table(&snapshot.top_cpu_processes, language));
    lines.push(l.top_memory.to_string());
    lines.push(format_process_table(&snapshot.top_memory_processes, language));

    lines.join("\n")
}

pub fn format_bottlenecks(bottlenecks: &[Bottleneck], language: Language) -> String {
    let rows: Vec<Vec<String>> = bottlenecks
        .iter()
        .map(|b| {
            vec![
                b.title.clone(),
                b.issue.clone(),
                b.evidence.clone(),
                b.solutions.join(" / "),
            ]
        })
        .collect();
    render_table(&labels(language).bottleneck_headers, &rows)
}

/// Full human-readable report: the snapshot followed by the diagnosis.
pub fn render_text(
    snapshot: &SystemSnapshot,
    bottlenecks: &[Bottleneck],
    language: Language,
) -> String {
    let l = labels(language);
    let mut out = format_snapshot(snapshot, language);
    out.push_str("\n\n");
    if bottlenecks.is_empty() {
        out.push_str(l.all_clear);
    } else {
        out.push_str(l.bottlenecks_heading);
        out.push('\n');
        out.push_str(&format_bottlenecks(bottlenecks, language));
    }
    out
}

#[derive(Serialize)]
struct Report<'a> {
    snapshot: &'a SystemSnapshot,
    bottlenecks: &'a [Bottleneck],
}

/// Pretty JSON `{ "snapshot": ..., "bottlenecks": [...] }`.
pub fn to_json(
    snapshot: &SystemSnapshot,
    bottlenecks: &[Bottleneck],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        snapshot,
        bottlenecks,
    })
}
