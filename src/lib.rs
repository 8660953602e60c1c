pub mod app;
pub mod config;
pub mod diagnostics;
pub mod format;
pub mod logging;
pub mod report;
pub mod system;

pub use diagnostics::{Bottleneck, Language, diagnose, diagnose_in};
pub use system::process::ProcessUsage;
pub use system::snapshot::{DiskUsage, LoadAverage, SystemSnapshot};
