//! Adlens - Ad campaign analytics engine
//!
//! # Usage
//!
//! ```bash
//! # All metric totals for a campaign
//! adlens totals -i impression_log.csv -c click_log.csv -s server_log.csv
//!
//! # Daily CTR series over a date range
//! adlens series -i i.csv -c c.csv -s s.csv \
//!     --metric ctr --granularity daily --range 2025-03-01,2025-03-14
//!
//! # Export selected metrics as CSV
//! adlens export -i i.csv -c c.csv -s s.csv \
//!     --metrics impressions,clicks,ctr --range 2025-03-01,2025-03-14
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adlens_config::Config;

/// Adlens - Ad campaign analytics engine
#[derive(Parser, Debug)]
#[command(name = "adlens")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every metric total for the loaded campaign
    Totals(cmd::totals::TotalsArgs),

    /// Print one metric bucketed over a date range
    Series(cmd::series::SeriesArgs),

    /// Export a bucketed table of selected metrics (CSV or JSON)
    Export(cmd::export::ExportArgs),

    /// Print a campaign overview with a click-cost histogram
    Summary(cmd::summary::SummaryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.log.level.as_str());
    init_logging(log_level)?;

    match cli.command {
        Command::Totals(args) => cmd::totals::run(args, &config),
        Command::Series(args) => cmd::series::run(args, &config),
        Command::Export(args) => cmd::export::run(args, &config),
        Command::Summary(args) => cmd::summary::run(args, &config),
    }
}

/// Load the config file, or defaults when none is specified
fn resolve_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::default()),
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
