//! Export command - bucketed table of selected metrics

use anyhow::Result;
use clap::Args;

use adlens_analytics::{AnalyticsEngine, Granularity};
use adlens_config::Config;

use super::{build_filter, load, parse_metrics, resolve_range, BounceArgs, CampaignArgs, FilterArgs};

/// Export command arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub bounce: BounceArgs,

    /// Metrics to export, comma-separated; defaults to all
    #[arg(short, long)]
    pub metrics: Option<String>,

    /// Time granularity (hourly, daily, weekly)
    #[arg(short, long, default_value = "daily")]
    pub granularity: String,

    /// Date range (e.g. 2025-03-01,2025-03-14); defaults to the campaign span
    #[arg(short, long)]
    pub range: Option<String>,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv")]
    pub format: String,
}

/// Run the export command
pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    let metrics = parse_metrics(args.metrics.as_deref())?;
    let granularity = Granularity::parse(&args.granularity)?;

    let campaign = load(&args.campaign, &args.bounce, config)?;
    let filter = build_filter(&args.filter)?;

    let snapshot = campaign.snapshot();
    let range = resolve_range(args.range.as_deref(), &snapshot)?;
    let engine = AnalyticsEngine::new(&snapshot);
    let table = engine.export_table(&metrics, &filter, &range, granularity);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        _ => {
            println!("{}", table.header().join(","));
            for row in &table.rows {
                let values: Vec<String> = row.values.iter().map(|v| v.to_string()).collect();
                println!("{},{}", row.bucket, values.join(","));
            }
        }
    }

    Ok(())
}
