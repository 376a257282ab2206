//! CLI subcommands
//!
//! Shared argument groups and helpers: loading the three logs into a
//! campaign, building a filter set from comma-separated flag values, and
//! value formatting. Formatting (2-decimal currency and percentages,
//! integer counts) lives here, never inside the engine.

pub mod export;
pub mod series;
pub mod summary;
pub mod totals;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use adlens_analytics::{DateRange, FilterSet, Metric};
use adlens_config::Config;
use adlens_events::{AgeRange, BounceCriteria, Campaign, Context, Gender, Income};
use adlens_ingest::load_campaign;

/// Campaign log file paths
#[derive(Args, Debug)]
pub struct CampaignArgs {
    /// Impression log CSV
    #[arg(short, long)]
    pub impressions: PathBuf,

    /// Click log CSV
    #[arg(short, long)]
    pub clicks: PathBuf,

    /// Server (session) log CSV
    #[arg(short, long)]
    pub server: PathBuf,
}

/// Demographic filter flags, each comma-separated multi-select
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Genders to include (e.g. male,female)
    #[arg(long)]
    pub gender: Option<String>,

    /// Age ranges to include (e.g. "<25,25-34")
    #[arg(long)]
    pub age: Option<String>,

    /// Income bands to include (e.g. low,high)
    #[arg(long)]
    pub income: Option<String>,

    /// Page contexts to include (e.g. news,blog)
    #[arg(long)]
    pub context: Option<String>,
}

/// Bounce criteria overrides on top of the config file
#[derive(Args, Debug, Default)]
pub struct BounceArgs {
    /// Minimum pages viewed before a session is engaged
    #[arg(long)]
    pub min_pages: Option<u32>,

    /// Minimum seconds on site before a session is engaged
    #[arg(long)]
    pub min_seconds: Option<i64>,

    /// Disable the pages-viewed criterion
    #[arg(long)]
    pub no_pages_criterion: bool,

    /// Disable the time-on-site criterion
    #[arg(long)]
    pub no_time_criterion: bool,
}

impl BounceArgs {
    /// Apply the overrides to the configured criteria
    pub fn apply(&self, mut criteria: BounceCriteria) -> BounceCriteria {
        if let Some(min_pages) = self.min_pages {
            criteria.min_pages_viewed = min_pages;
        }
        if let Some(min_seconds) = self.min_seconds {
            criteria.min_time_on_site_secs = min_seconds;
        }
        if self.no_pages_criterion {
            criteria.consider_pages_viewed = false;
        }
        if self.no_time_criterion {
            criteria.consider_time_on_site = false;
        }
        criteria
    }
}

/// Load the three logs into a campaign handle
///
/// Starts from the config file's bounce criteria and pushes any CLI
/// overrides through the aggregate's update operation.
pub fn load(args: &CampaignArgs, bounce: &BounceArgs, config: &Config) -> Result<Campaign> {
    let criteria = config.bounce.to_criteria();
    let state = load_campaign(&args.impressions, &args.clicks, &args.server, criteria)
        .context("failed to load campaign logs")?;

    let campaign = Campaign::new(state);
    let overridden = bounce.apply(criteria);
    if overridden != criteria {
        campaign.update_bounce_criteria(overridden);
    }
    Ok(campaign)
}

/// Build a filter set from the CLI flags
pub fn build_filter(args: &FilterArgs) -> Result<FilterSet> {
    let mut filter = FilterSet::none();

    if let Some(genders) = &args.gender {
        for token in split(genders) {
            filter = filter.with_gender(Gender::parse(token)?);
        }
    }
    if let Some(ages) = &args.age {
        for token in split(ages) {
            filter = filter.with_age(AgeRange::parse(token)?);
        }
    }
    if let Some(incomes) = &args.income {
        for token in split(incomes) {
            filter = filter.with_income(Income::parse(token)?);
        }
    }
    if let Some(contexts) = &args.context {
        for token in split(contexts) {
            filter = filter.with_context(Context::parse(token)?);
        }
    }

    Ok(filter)
}

/// Resolve the query range: an explicit flag, or the campaign's own span
pub fn resolve_range(
    range: Option<&str>,
    campaign: &adlens_events::CampaignState,
) -> Result<DateRange> {
    if let Some(range) = range {
        return Ok(DateRange::parse(range)?);
    }

    let (first, last) = campaign
        .store()
        .impression_span()
        .context("campaign has no impressions; pass --range explicitly")?;
    Ok(DateRange::from_span(first, last)?)
}

/// Parse a comma-separated metric list, defaulting to every metric
pub fn parse_metrics(metrics: Option<&str>) -> Result<Vec<Metric>> {
    match metrics {
        Some(metrics) => split(metrics)
            .map(|token| Metric::parse(token).map_err(Into::into))
            .collect(),
        None => Ok(Metric::ALL.to_vec()),
    }
}

/// Render one metric value for display
///
/// Counts print as integers, costs with 2 decimals, rates with 2 decimals
/// and a percent sign.
pub fn format_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Ctr | Metric::BounceRate => format!("{:.2}%", value),
        metric if metric.is_cost() => format!("{:.2}", value),
        _ => format!("{:.0}", value),
    }
}

fn split(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty())
}
