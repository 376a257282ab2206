//! Series command - one metric bucketed over a date range

use anyhow::Result;
use clap::Args;

use adlens_analytics::{AnalyticsEngine, Granularity, Metric};
use adlens_config::Config;

use super::{build_filter, format_value, load, resolve_range, BounceArgs, CampaignArgs, FilterArgs};

/// Series command arguments
#[derive(Args, Debug)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub bounce: BounceArgs,

    /// Metric to plot (impressions, clicks, uniques, bounces, conversions,
    /// total_cost, ctr, cpc, cpa, cpm, bounce_rate)
    #[arg(short, long, default_value = "impressions")]
    pub metric: String,

    /// Time granularity (hourly, daily, weekly)
    #[arg(short, long, default_value = "daily")]
    pub granularity: String,

    /// Date range (e.g. 2025-03-01,2025-03-14); defaults to the campaign span
    #[arg(short, long)]
    pub range: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the series command
pub fn run(args: SeriesArgs, config: &Config) -> Result<()> {
    let metric = Metric::parse(&args.metric)?;
    let granularity = Granularity::parse(&args.granularity)?;

    let campaign = load(&args.campaign, &args.bounce, config)?;
    let filter = build_filter(&args.filter)?;

    let snapshot = campaign.snapshot();
    let range = resolve_range(args.range.as_deref(), &snapshot)?;
    let engine = AnalyticsEngine::new(&snapshot);
    let series = engine.series(metric, &filter, &range, granularity);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        "csv" => {
            println!("bucket,{}", metric.as_str());
            for point in &series.points {
                println!("{},{}", point.bucket, point.value);
            }
        }
        _ => {
            if series.is_empty() {
                println!("(no data)");
                return Ok(());
            }

            println!("{:<18} {:>15}", "Bucket", metric.as_str());
            println!("{}", "-".repeat(34));
            for point in &series.points {
                println!(
                    "{:<18} {:>15}",
                    point.bucket,
                    format_value(metric, point.value)
                );
            }

            println!("{}", "-".repeat(34));
            println!(
                "Total: {:.2}  Min: {:.2}  Max: {:.2}  Avg: {:.2}",
                series.total, series.min, series.max, series.avg
            );
        }
    }

    Ok(())
}
