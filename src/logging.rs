use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, raised by each `-v`.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Human-readable logs on stderr so stdout stays clean for the report.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
