use super::{Bottleneck, Language};
use crate::system::snapshot::SystemSnapshot;

const NOTICEABLE_PERCENT: f64 = 15.0;
const FREQUENT_PERCENT: f64 = 40.0;

pub fn evaluate(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    let swap_percent = snapshot.swap_percent;
    if swap_percent < NOTICEABLE_PERCENT {
        return Vec::new();
    }
    let frequent = swap_percent >= FREQUENT_PERCENT;

    let finding = match language {
        Language::English => {
            let severity = if frequent { "frequent" } else { "noticeable" };
            Bottleneck::new(
                "Swap Activity",
                format!("There is {severity} swap activity, physical memory is under pressure."),
                format!("Swap usage {swap_percent:.0}%."),
                &[
                    "Reduce the number of resident background apps such as Electron apps and browsers.",
                    "Close memory-heavy containers or emulators, then check whether the stutter eases.",
                ],
            )
        }
        Language::Chinese => {
            let severity = if frequent { "频繁" } else { "明显" };
            Bottleneck::new(
                "Swap 读写",
                format!("出现{severity}的虚拟内存读写，说明物理内存紧张。"),
                format!("交换分区占用 {swap_percent:.0}% 。"),
                &[
                    "减少常驻后台的 Electron/浏览器应用数量。",
                    "关闭占用内存高的容器或模拟器，释放内存后观察卡顿是否缓解。",
                ],
            )
        }
    };
    vec![finding]
}
