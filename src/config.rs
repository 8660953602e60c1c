use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::system::collector::SampleIntervals;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub collector: CollectorConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub language: String,
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            language: "en".to_string(),
            output: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    pub top_processes: usize,
    pub cpu_sample_ms: u64,
    pub process_sample_ms: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            top_processes: 5,
            cpu_sample_ms: 300,
            process_sample_ms: 100,
        }
    }
}

impl CollectorConfig {
    pub fn sample_intervals(&self) -> SampleIntervals {
        SampleIntervals {
            cpu: Duration::from_millis(self.cpu_sample_ms),
            process: Duration::from_millis(self.process_sample_ms),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("slowcheck").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            debug!("no config file, using defaults");
            Config::default()
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot read config, using defaults");
            return Config::default();
        }
    };
    match toml::from_str(&contents) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid config, using defaults");
            Config::default()
        }
    }
}
