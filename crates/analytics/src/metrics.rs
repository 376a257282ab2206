//! Metric kinds and derivation formulas
//!
//! Metrics come in two families: counts accumulated in one pass over the
//! filtered events of a window, and ratios derived from those counts. Every
//! ratio returns exactly `0.0` when its denominator count is zero.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// A computable campaign metric
///
/// A closed enum rather than a name string, so metric dispatch is checked
/// exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Number of matching impressions
    Impressions,
    /// Number of matching clicks
    Clicks,
    /// Distinct impression user ids in the window
    Uniques,
    /// Matching sessions classified as bounces
    Bounces,
    /// Matching sessions with the conversion flag set
    Conversions,
    /// Impression cost plus click cost
    TotalCost,
    /// Click-through rate: clicks / impressions x 100
    Ctr,
    /// Cost per click: total cost / clicks
    Cpc,
    /// Cost per acquisition: total cost / conversions
    Cpa,
    /// Cost per mille: total cost / impressions x 1000
    Cpm,
    /// Bounce rate: bounces / sessions x 100
    BounceRate,
}

impl Metric {
    /// Every metric, in display order
    pub const ALL: [Self; 11] = [
        Self::Impressions,
        Self::Clicks,
        Self::Uniques,
        Self::Bounces,
        Self::Conversions,
        Self::TotalCost,
        Self::Ctr,
        Self::Cpc,
        Self::Cpa,
        Self::Cpm,
        Self::BounceRate,
    ];

    /// Parse a metric name
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "impressions" => Ok(Self::Impressions),
            "clicks" => Ok(Self::Clicks),
            "uniques" => Ok(Self::Uniques),
            "bounces" => Ok(Self::Bounces),
            "conversions" => Ok(Self::Conversions),
            "total_cost" | "total-cost" | "cost" => Ok(Self::TotalCost),
            "ctr" => Ok(Self::Ctr),
            "cpc" => Ok(Self::Cpc),
            "cpa" => Ok(Self::Cpa),
            "cpm" => Ok(Self::Cpm),
            "bounce_rate" | "bounce-rate" => Ok(Self::BounceRate),
            _ => Err(AnalyticsError::InvalidMetric(s.to_string())),
        }
    }

    /// Get the string name of this metric
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::Uniques => "uniques",
            Self::Bounces => "bounces",
            Self::Conversions => "conversions",
            Self::TotalCost => "total_cost",
            Self::Ctr => "ctr",
            Self::Cpc => "cpc",
            Self::Cpa => "cpa",
            Self::Cpm => "cpm",
            Self::BounceRate => "bounce_rate",
        }
    }

    /// Whether this metric is a derived ratio rather than a plain count
    pub const fn is_ratio(self) -> bool {
        matches!(
            self,
            Self::Ctr | Self::Cpc | Self::Cpa | Self::Cpm | Self::BounceRate
        )
    }

    /// Whether this metric carries a currency value
    pub const fn is_cost(self) -> bool {
        matches!(self, Self::TotalCost | Self::Cpc | Self::Cpa | Self::Cpm)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw counts and cost sums accumulated over one window
///
/// The single source every metric derives from; filled by the engine in one
/// pass over the filtered events of the window.
#[derive(Debug, Default)]
pub(crate) struct WindowCounts {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub sessions: u64,
    pub bounces: u64,
    pub impression_cost: f64,
    pub click_cost: f64,
    /// Distinct impression user ids seen in this window
    pub unique_users: HashSet<String>,
}

impl WindowCounts {
    pub fn total_cost(&self) -> f64 {
        self.impression_cost + self.click_cost
    }

    pub fn uniques(&self) -> u64 {
        self.unique_users.len() as u64
    }

    /// Derive one metric's value, zero-guarding every ratio
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Impressions => self.impressions as f64,
            Metric::Clicks => self.clicks as f64,
            Metric::Uniques => self.uniques() as f64,
            Metric::Bounces => self.bounces as f64,
            Metric::Conversions => self.conversions as f64,
            Metric::TotalCost => self.total_cost(),
            Metric::Ctr => ratio(self.clicks as f64, self.impressions) * 100.0,
            Metric::Cpc => ratio(self.total_cost(), self.clicks),
            Metric::Cpa => ratio(self.total_cost(), self.conversions),
            Metric::Cpm => ratio(self.total_cost(), self.impressions) * 1000.0,
            Metric::BounceRate => ratio(self.bounces as f64, self.sessions) * 100.0,
        }
    }
}

/// `numerator / denominator`, or exactly 0.0 when the denominator count is 0
fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

/// Every metric computed over one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTotals {
    /// Matching impressions
    pub impressions: u64,
    /// Matching clicks
    pub clicks: u64,
    /// Distinct impression user ids
    pub uniques: u64,
    /// Matching sessions classified as bounces
    pub bounces: u64,
    /// Matching converted sessions
    pub conversions: u64,
    /// Matching sessions of any kind
    pub sessions: u64,
    /// Impression cost plus click cost
    pub total_cost: f64,
    /// Click-through rate (percent)
    pub ctr: f64,
    /// Cost per click
    pub cpc: f64,
    /// Cost per acquisition
    pub cpa: f64,
    /// Cost per thousand impressions
    pub cpm: f64,
    /// Bounce rate (percent)
    pub bounce_rate: f64,
}

impl MetricTotals {
    pub(crate) fn from_counts(counts: &WindowCounts) -> Self {
        Self {
            impressions: counts.impressions,
            clicks: counts.clicks,
            uniques: counts.uniques(),
            bounces: counts.bounces,
            conversions: counts.conversions,
            sessions: counts.sessions,
            total_cost: counts.total_cost(),
            ctr: counts.value(Metric::Ctr),
            cpc: counts.value(Metric::Cpc),
            cpa: counts.value(Metric::Cpa),
            cpm: counts.value(Metric::Cpm),
            bounce_rate: counts.value(Metric::BounceRate),
        }
    }

    /// Look up one metric's value
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Impressions => self.impressions as f64,
            Metric::Clicks => self.clicks as f64,
            Metric::Uniques => self.uniques as f64,
            Metric::Bounces => self.bounces as f64,
            Metric::Conversions => self.conversions as f64,
            Metric::TotalCost => self.total_cost,
            Metric::Ctr => self.ctr,
            Metric::Cpc => self.cpc,
            Metric::Cpa => self.cpa,
            Metric::Cpm => self.cpm,
            Metric::BounceRate => self.bounce_rate,
        }
    }
}

/// One bar of a click-cost histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin (inclusive)
    pub lower: f64,
    /// Upper edge of the bin (exclusive, except the last bin)
    pub upper: f64,
    /// Number of clicks whose cost falls in the bin
    pub count: u64,
}
