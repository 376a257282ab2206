//! Summary command - campaign overview

use anyhow::Result;
use clap::Args;

use adlens_analytics::{AnalyticsEngine, FilterSet, Metric};
use adlens_config::Config;

use super::{format_value, load, BounceArgs, CampaignArgs};

/// Summary command arguments
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub bounce: BounceArgs,
}

/// Run the summary command
pub fn run(args: SummaryArgs, config: &Config) -> Result<()> {
    let campaign = load(&args.campaign, &args.bounce, config)?;
    let snapshot = campaign.snapshot();
    let store = snapshot.store();

    println!("Campaign");
    println!("{}", "-".repeat(40));
    println!("{:<22} {:>17}", "Impressions", store.impressions().len());
    println!("{:<22} {:>17}", "Clicks", store.clicks().len());
    println!("{:<22} {:>17}", "Sessions", store.sessions().len());
    println!("{:<22} {:>17}", "Known users", store.known_users());

    if let Some((first, last)) = store.impression_span() {
        println!(
            "{:<22} {:>17}",
            "From",
            first.format("%Y-%m-%d %H:%M").to_string()
        );
        println!(
            "{:<22} {:>17}",
            "To",
            last.format("%Y-%m-%d %H:%M").to_string()
        );
    }

    let filter = FilterSet::none();
    let engine = AnalyticsEngine::new(&snapshot);
    let totals = engine.totals(&filter);

    println!();
    println!("Totals");
    println!("{}", "-".repeat(40));
    for metric in Metric::ALL {
        println!(
            "{:<22} {:>17}",
            metric.as_str(),
            format_value(metric, totals.value(metric))
        );
    }

    let histogram = engine.cost_histogram(&filter, config.histogram.bins);
    let tallest = histogram.iter().map(|b| b.count).max().unwrap_or(0);

    println!();
    println!("Click cost histogram");
    println!("{}", "-".repeat(40));
    for bin in &histogram {
        let bar_len = if tallest == 0 {
            0
        } else {
            (bin.count * 20 / tallest) as usize
        };
        println!(
            "{:>8.4} - {:>8.4}  {:>7}  {}",
            bin.lower,
            bin.upper,
            bin.count,
            "#".repeat(bar_len)
        );
    }

    Ok(())
}
