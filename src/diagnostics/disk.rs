use super::{Bottleneck, Language};
use crate::system::snapshot::{DiskUsage, SystemSnapshot};

const LOW_SPACE_PERCENT: f64 = 85.0;

/// One finding per nearly full mount, in partition order.
pub fn evaluate(snapshot: &SystemSnapshot, language: Language) -> Vec<Bottleneck> {
    snapshot
        .disk_usages
        .iter()
        .filter(|disk| disk.percent >= LOW_SPACE_PERCENT)
        .map(|disk| low_space(disk, language))
        .collect()
}

fn low_space(disk: &DiskUsage, language: Language) -> Bottleneck {
    match language {
        Language::English => Bottleneck::new(
            "Low Disk Space",
            format!(
                "The {} partition is almost full, so writes and virtual memory will slow down.",
                disk.mount_point
            ),
            format!(
                "Usage {:.0}% ({:.1} / {:.1} GiB used).",
                disk.percent, disk.used_gb, disk.total_gb
            ),
            &[
                "Clear build outputs, package caches, container images and other temporary files.",
                "Move large videos and installers to an external drive or cloud storage.",
                "Run the system storage optimizer and empty the trash.",
            ],
        ),
        Language::Chinese => Bottleneck::new(
            "磁盘空间不足",
            format!("{} 分区空间告急，写入和虚拟内存会变慢。", disk.mount_point),
            format!(
                "使用率 {:.0}% （已用 {:.1} / {:.1} GiB）。",
                disk.percent, disk.used_gb, disk.total_gb
            ),
            &[
                "清理构建产物、依赖缓存、Docker 镜像等临时文件。",
                "将大型视频、安装包移动到外置硬盘或云存储。",
                "开启系统存储优化并清空废纸篓。",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::healthy_snapshot;

    fn disk(mount: &str, percent: f64) -> DiskUsage {
        DiskUsage {
            mount_point: mount.to_string(),
            total_gb: 500.0,
            used_gb: 500.0 * percent / 100.0,
            percent,
        }
    }

    #[test]
    fn single_full_disk() {
        let mut s = healthy_snapshot();
        s.disk_usages = vec![disk("/", 92.0)];

        let found = evaluate(&s, Language::English);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Low Disk Space");
        assert!(found[0].issue.contains("/"));
        assert_eq!(found[0].evidence, "Usage 92% (460.0 / 500.0 GiB used).");
    }

    #[test]
    fn each_full_mount_reported_in_order() {
        let mut s = healthy_snapshot();
        s.disk_usages = vec![
            disk("/", 90.0),
            disk("/boot", 40.0),
            disk("/Volumes/Data", 85.0),
        ];

        let found = evaluate(&s, Language::English);
        assert_eq!(found.len(), 2);
        assert!(found[0].issue.contains("The / partition"));
        assert!(found[1].issue.contains("/Volumes/Data"));
    }

    #[test]
    fn no_disks_no_findings() {
        assert!(evaluate(&healthy_snapshot(), Language::English).is_empty());
    }
}
