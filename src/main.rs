use std::io::{Write, stdout};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use slowcheck::app::{Options, inspect};
use slowcheck::config::{Config, load_config, load_config_from_path};
use slowcheck::diagnostics::Language;
use slowcheck::logging::init_tracing;
use slowcheck::report::OutputFormat;
use slowcheck::system::collector::Collector;

#[derive(Parser)]
#[command(
    name = "slowcheck",
    about = "Find out what is slowing this machine down and how to fix it"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of top processes to show per list
    #[arg(long)]
    top: Option<usize>,

    /// Print raw data and diagnosis as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Message language: en, zh
    #[arg(long)]
    lang: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = load_config_for_cli(&cli);
    let options = resolve_options(&cli, &config)?;

    let mut collector = Collector::new(config.collector.sample_intervals());
    let inspection = inspect(&mut collector, &options).await;
    let rendered = inspection.render(&options)?;

    let mut out = stdout().lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    }
}

fn resolve_options(cli: &Cli, config: &Config) -> Result<Options> {
    let mut options = Options::from_config(config);

    if let Some(top) = cli.top {
        options.top_n = top;
    }
    if let Some(ref lang) = cli.lang {
        options.language = Language::from_config_str(lang);
    }
    if cli.json {
        options.output = OutputFormat::Json;
    }

    if options.top_n == 0 {
        return Err(eyre!("--top must be greater than 0"));
    }
    Ok(options)
}
