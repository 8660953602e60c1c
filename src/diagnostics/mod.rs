//! Rule-based bottleneck diagnosis over a single [`SystemSnapshot`].
//!
//! Every rule is an independent pure function. [`diagnose_in`] runs them in a
//! fixed order (CPU, memory, disk, swap, battery) and concatenates whatever
//! they report, so callers can rely on positions being stable.

pub mod battery;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod swap;

use serde::Serialize;

use crate::system::process::ProcessUsage;
use crate::system::snapshot::SystemSnapshot;

/// One diagnosed issue with the measurements behind it and what to do about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bottleneck {
    pub title: String,
    pub issue: String,
    pub evidence: String,
    /// Most broadly applicable first.
    pub solutions: Vec<String>,
}

impl Bottleneck {
    fn new(
        title: impl Into<String>,
        issue: impl Into<String>,
        evidence: impl Into<String>,
        solutions: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            issue: issue.into(),
            evidence: evidence.into(),
            solutions: solutions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" | "cn" | "chinese" => Language::Chinese,
            _ => Language::English,
        }
    }
}

pub type Rule = fn(&SystemSnapshot, Language) -> Vec<Bottleneck>;

/// Evaluation order. Consumers depend on it.
pub const RULES: [Rule; 5] = [
    cpu::evaluate,
    memory::evaluate,
    disk::evaluate,
    swap::evaluate,
    battery::evaluate,
];

/// Diagnose with English messages.
pub fn diagnose(snapshot: &SystemSnapshot) -> Vec<Bottleneck> {
    diagnose_in(snapshot, Language::English)
}

pub fn diagnose_in(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    RULES
        .iter()
        .flat_map(|rule| rule(snapshot, language))
        .collect()
}

const OFFENDER_LIMIT: usize = 3;

/// "name (pid P, C% CPU, M% memory)" for up to three processes.
fn offender_summary(processes: &[ProcessUsage], language: Language) -> String {
    if processes.is_empty() {
        return match language {
            Language::English => "Could not identify a high-usage process.".to_string(),
            Language::Chinese => "未能识别高占用进程。".to_string(),
        };
    }

    let memory_label = match language {
        Language::English => "memory",
        Language::Chinese => "内存",
    };
    let offenders = processes
        .iter()
        .take(OFFENDER_LIMIT)
        .map(|p| {
            format!(
                "{} (pid {}, {:.0}% CPU, {:.0}% {memory_label})",
                p.name, p.pid, p.cpu_percent, p.memory_percent
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    match language {
        Language::English => format!("Top consumers: {offenders}."),
        Language::Chinese => format!("主要占用：{offenders}。"),
    }
}
