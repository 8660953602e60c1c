use tracing::{debug, info};

use crate::config::Config;
use crate::diagnostics::{Bottleneck, Language, diagnose_in};
use crate::report::{self, OutputFormat};
use crate::system::collector::SnapshotProvider;
use crate::system::snapshot::SystemSnapshot;

/// Settings resolved from config and command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub top_n: usize,
    pub language: Language,
    pub output: OutputFormat,
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        Self {
            top_n: config.collector.top_processes,
            language: Language::from_config_str(&config.general.language),
            output: OutputFormat::from_config_str(&config.general.output),
        }
    }
}

/// A snapshot together with what was diagnosed from it.
#[derive(Clone, Debug)]
pub struct Inspection {
    pub snapshot: SystemSnapshot,
    pub bottlenecks: Vec<Bottleneck>,
}

impl Inspection {
    pub fn from_snapshot(snapshot: SystemSnapshot, language: Language) -> Self {
        let bottlenecks = diagnose_in(&snapshot, language);
        for b in &bottlenecks {
            info!(title = %b.title, evidence = %b.evidence, "bottleneck");
        }
        Self {
            snapshot,
            bottlenecks,
        }
    }

    pub fn render(&self, options: &Options) -> serde_json::Result<String> {
        match options.output {
            OutputFormat::Json => report::to_json(&self.snapshot, &self.bottlenecks),
            OutputFormat::Text => Ok(report::render_text(
                &self.snapshot,
                &self.bottlenecks,
                options.language,
            )),
        }
    }
}

pub async fn inspect<P: SnapshotProvider>(provider: &mut P, options: &Options) -> Inspection {
    let snapshot = provider.snapshot(options.top_n).await;
    debug!(
        cpu_percent = snapshot.cpu_percent,
        memory_percent = snapshot.memory_percent,
        swap_percent = snapshot.swap_percent,
        disks = snapshot.disk_usages.len(),
        "snapshot collected"
    );
    let inspection = Inspection::from_snapshot(snapshot, options.language);
    debug!(count = inspection.bottlenecks.len(), "diagnosis complete");
    inspection
}
