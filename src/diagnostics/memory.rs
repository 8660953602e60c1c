use super::{Bottleneck, Language, offender_summary};
use crate::system::snapshot::{GIB, SystemSnapshot};

const PRESSURE_PERCENT: f64 = 85.0;

pub fn evaluate(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    let pressured = snapshot.memory_percent >= PRESSURE_PERCENT;
    if !pressured {
        return Vec::new();
    }

    let offenders = offender_summary(&snapshot.top_memory_processes, language);
    let used_gib = snapshot.memory_used as f64 / GIB;
    let finding = match language {
        Language::English => Bottleneck::new(
            "Memory Pressure",
            "Available memory is running out and the system may be paging heavily.",
            format!(
                "Memory usage {:.0}%, {used_gib:.1} GiB used. {offenders}",
                snapshot.memory_percent
            ),
            &[
                "Close memory-hungry applications or browser tabs and keep fewer projects open at once.",
                "Check whether memory pressure stays high in your system monitor and restart heavy services if needed.",
                "Add more memory, or run fewer virtual machines in the background.",
            ],
        ),
        Language::Chinese => Bottleneck::new(
            "内存压力",
            "可用内存不足，系统可能在频繁换页导致卡顿。",
            format!(
                "内存占用 {:.0}% ，已用 {used_gib:.1} GiB。{offenders}",
                snapshot.memory_percent
            ),
            &[
                "关闭占用高的应用或浏览器标签页，减少并行打开的工程。",
                "在系统监视器中查看内存压力是否持续偏高，必要时重启占用高的服务。",
                "升级内存容量或减少后台虚拟机数量。",
            ],
        ),
    };
    vec![finding]
}
