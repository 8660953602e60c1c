use std::cmp::Ordering;

use serde::Serialize;

/// One sampled process.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessUsage {
    pub pid: u32,
    pub name: String,
    /// Summed across cores, so it can exceed 100 on multi-core machines.
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub rss_bytes: u64,
    /// Cumulative since process start, zero when the OS denies access.
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Keep the `top_n` entries with the highest `metric`, highest first.
///
/// Ties keep their input order. NaN values sort last.
pub fn top_by<F>(processes: &[ProcessUsage], top_n: usize, metric: F) -> Vec<ProcessUsage>
where
    F: Fn(&ProcessUsage) -> f64,
{
    let mut ranked: Vec<&ProcessUsage> = processes.iter().collect();
    ranked.sort_by(|a, b| descending(metric(a), metric(b)));
    ranked.into_iter().take(top_n).cloned().collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
