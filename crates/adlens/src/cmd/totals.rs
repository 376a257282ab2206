//! Totals command - every metric over the full filtered campaign

use anyhow::Result;
use clap::Args;

use adlens_analytics::{AnalyticsEngine, Metric};
use adlens_config::Config;

use super::{build_filter, format_value, load, BounceArgs, CampaignArgs, FilterArgs};

/// Totals command arguments
#[derive(Args, Debug)]
pub struct TotalsArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub bounce: BounceArgs,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the totals command
pub fn run(args: TotalsArgs, config: &Config) -> Result<()> {
    let campaign = load(&args.campaign, &args.bounce, config)?;
    let filter = build_filter(&args.filter)?;

    let snapshot = campaign.snapshot();
    let engine = AnalyticsEngine::new(&snapshot);
    let totals = engine.totals(&filter);

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        _ => {
            println!("{:<14} {:>15}", "Metric", "Value");
            println!("{}", "-".repeat(30));
            for metric in Metric::ALL {
                println!(
                    "{:<14} {:>15}",
                    metric.as_str(),
                    format_value(metric, totals.value(metric))
                );
            }
        }
    }

    Ok(())
}
