use super::{Bottleneck, Language, offender_summary};
use crate::system::snapshot::SystemSnapshot;

const HOTSPOT_PERCENT: f64 = 85.0;
const HOTSPOT_LOAD_FACTOR: f64 = 1.5;

/// Two mutually exclusive tiers: hotspot, else elevated load.
///
/// Elevated load needs the 1-minute load strictly above the core count;
/// hotspot fires at 85% aggregate or load at 1.5x the core count.
pub fn evaluate(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    let load_1m = snapshot.load_avg.one;
    let cores = snapshot.cpu_count as f64;

    if snapshot.cpu_percent >= HOTSPOT_PERCENT || load_1m >= cores * HOTSPOT_LOAD_FACTOR {
        vec![hotspot(snapshot, language)]
    } else if load_1m > cores {
        vec![elevated_load(snapshot, language)]
    } else {
        Vec::new()
    }
}

fn hotspot(snapshot: &SystemSnapshot, language: Language) -> Bottleneck {
    let offenders = offender_summary(&snapshot.top_cpu_processes, language);
    let load_1m = snapshot.load_avg.one;
    match language {
        Language::English => Bottleneck::new(
            "CPU Hotspot",
            "The CPU has been busy for a sustained period and is slowing the system down.",
            format!(
                "Total usage {:.0}%, 1-minute load average {load_1m:.2} ({} cores). {offenders}",
                snapshot.cpu_percent, snapshot.cpu_count
            ),
            &[
                "Force quit the offending process from your activity monitor, or run `kill <pid>` in a terminal.",
                "Stop or pause heavy compilation, transcoding or virtual machine workloads.",
                "Switch heavy applications to native builds to avoid the extra CPU spent in compatibility layers or emulators.",
            ],
        ),
        Language::Chinese => Bottleneck::new(
            "CPU 热点",
            "CPU 长时间占用高，正在拖慢系统响应。",
            format!(
                "总占用 {:.0}% ，1 分钟平均负载 {load_1m:.2}（{} 核心）。{offenders}",
                snapshot.cpu_percent, snapshot.cpu_count
            ),
            &[
                "在活动监视器中强制退出占用高的进程，或在终端执行 `kill <pid>`。",
                "关闭或暂停正在进行的大量编译、转码、虚拟机等任务。",
                "升级重负载应用，避免兼容层或模拟器导致的额外 CPU 消耗。",
            ],
        ),
    }
}

fn elevated_load(snapshot: &SystemSnapshot, language: Language) -> Bottleneck {
    let load_1m = snapshot.load_avg.one;
    match language {
        Language::English => Bottleneck::new(
            "Elevated CPU Load",
            "Load exceeds the number of available cores, so work is briefly queuing.",
            format!(
                "1-minute load average {load_1m:.2}, {} cores.",
                snapshot.cpu_count
            ),
            &[
                "Check for background compile jobs or scripts that were left running.",
                "Reduce the number of containers or virtual machines running at the same time.",
            ],
        ),
        Language::Chinese => Bottleneck::new(
            "CPU 负载偏高",
            "负载超过可用核心数，存在短时堵塞。",
            format!("1 分钟平均负载 {load_1m:.2}，核心数 {}。", snapshot.cpu_count),
            &[
                "检查是否有后台编译或脚本任务忘记关闭。",
                "减少同时运行的 Docker/虚拟机实例数量。",
            ],
        ),
    }
}
