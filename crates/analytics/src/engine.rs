//! Aggregation engine
//!
//! Orchestrates filtering, bucketing, bounce classification, and metric
//! derivation over one immutable campaign snapshot. Totals traverse the
//! whole campaign; series and export tables accumulate per-bucket counts in
//! a single pass over each event kind.
//!
//! The engine is total over well-formed inputs: no data in a range yields
//! zero-valued points, never an error.

use std::collections::HashMap;

use chrono::Utc;
use tracing::warn;

use adlens_events::CampaignState;

use crate::bucket::{buckets_for, Bucket, Granularity};
use crate::filter::FilterSet;
use crate::metrics::{HistogramBin, Metric, MetricTotals, WindowCounts};
use crate::timerange::DateRange;
use crate::timeseries::{MetricTable, TableRow, TimeSeries, TimeSeriesPoint};

/// Analytics queries over one campaign snapshot
///
/// Borrowing the snapshot keeps the engine trivially cheap to construct;
/// callers create one per query batch.
pub struct AnalyticsEngine<'a> {
    state: &'a CampaignState,
}

impl<'a> AnalyticsEngine<'a> {
    /// Create an engine over a campaign snapshot
    pub fn new(state: &'a CampaignState) -> Self {
        Self { state }
    }

    /// Every metric over the full filtered campaign
    pub fn totals(&self, filter: &FilterSet) -> MetricTotals {
        MetricTotals::from_counts(&self.collect(filter, None))
    }

    /// One metric over the full filtered campaign
    pub fn total(&self, metric: Metric, filter: &FilterSet) -> f64 {
        self.collect(filter, None).value(metric)
    }

    /// One metric per bucket of a date range
    ///
    /// Points appear in chronological bucket order; buckets without data
    /// hold zero. Uniques deduplicate within each bucket independently.
    pub fn series(
        &self,
        metric: Metric,
        filter: &FilterSet,
        range: &DateRange,
        granularity: Granularity,
    ) -> TimeSeries {
        let buckets = buckets_for(range, granularity);
        let counts = self.collect_buckets(filter, &buckets, granularity);

        let points = buckets
            .iter()
            .zip(&counts)
            .map(|(bucket, counts)| TimeSeriesPoint::new(bucket.to_string(), counts.value(metric)))
            .collect();

        TimeSeries::from_points(points)
    }

    /// A bucketed table with one column per selected metric
    ///
    /// The export shape: one row per bucket label, each holding the selected
    /// metrics computed under the same filter and bounce rules as any other
    /// query.
    pub fn export_table(
        &self,
        metrics: &[Metric],
        filter: &FilterSet,
        range: &DateRange,
        granularity: Granularity,
    ) -> MetricTable {
        let buckets = buckets_for(range, granularity);
        let counts = self.collect_buckets(filter, &buckets, granularity);

        let rows = buckets
            .iter()
            .zip(&counts)
            .map(|(bucket, counts)| TableRow {
                bucket: bucket.to_string(),
                values: metrics.iter().map(|m| counts.value(*m)).collect(),
            })
            .collect();

        MetricTable::new(metrics.to_vec(), rows)
    }

    /// One metric for the bucket named by a label string
    ///
    /// A label that does not parse under the granularity falls back to the
    /// bucket of "now" with a warning; it never disturbs other buckets.
    pub fn bucket_value(
        &self,
        metric: Metric,
        filter: &FilterSet,
        label: &str,
        granularity: Granularity,
    ) -> f64 {
        let bucket = match Bucket::parse(label, granularity) {
            Ok(bucket) => bucket,
            Err(err) => {
                warn!(%err, "falling back to the current bucket");
                Bucket::of(Utc::now(), granularity)
            }
        };

        self.collect(filter, Some(&bucket)).value(metric)
    }

    /// Histogram of filtered click costs in equal-width bins
    ///
    /// `bins` is clamped to at least 1. With no matching clicks, or every
    /// cost equal to zero, the bin width would degenerate; a single bin
    /// spanning the data is returned instead.
    pub fn cost_histogram(&self, filter: &FilterSet, bins: usize) -> Vec<HistogramBin> {
        let store = self.state.store();
        let costs: Vec<f64> = store
            .clicks()
            .iter()
            .filter(|c| filter.matches_attributes(store.user_attributes(&c.user_id)))
            .map(|c| c.cost)
            .collect();

        let bins = bins.max(1);
        let max = costs.iter().fold(0.0_f64, |acc, c| acc.max(*c));

        if costs.is_empty() || max == 0.0 {
            return vec![HistogramBin {
                lower: 0.0,
                upper: max,
                count: costs.len() as u64,
            }];
        }

        let width = max / bins as f64;
        let mut counts = vec![0u64; bins];
        for cost in &costs {
            let index = ((cost / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: width * i as f64,
                upper: width * (i + 1) as f64,
                count,
            })
            .collect()
    }

    /// Accumulate counts over the whole campaign or one bucket
    fn collect(&self, filter: &FilterSet, bucket: Option<&Bucket>) -> WindowCounts {
        let store = self.state.store();
        let criteria = self.state.criteria();
        let mut counts = WindowCounts::default();

        let in_window = |timestamp| match bucket {
            Some(bucket) => bucket.contains(timestamp),
            None => true,
        };

        for impression in store.impressions() {
            if !in_window(impression.timestamp) {
                continue;
            }
            if !filter.matches(
                impression.gender,
                impression.age,
                impression.income,
                impression.context,
            ) {
                continue;
            }
            counts.impressions += 1;
            counts.impression_cost += impression.cost;
            if !counts.unique_users.contains(&impression.user_id) {
                counts.unique_users.insert(impression.user_id.clone());
            }
        }

        for click in store.clicks() {
            if !in_window(click.timestamp) {
                continue;
            }
            if !filter.matches_attributes(store.user_attributes(&click.user_id)) {
                continue;
            }
            counts.clicks += 1;
            counts.click_cost += click.cost;
        }

        for session in store.sessions() {
            if !in_window(session.entry) {
                continue;
            }
            if !filter.matches_attributes(store.user_attributes(&session.user_id)) {
                continue;
            }
            counts.sessions += 1;
            if session.conversion {
                counts.conversions += 1;
            }
            if criteria.is_bounce(session) {
                counts.bounces += 1;
            }
        }

        counts
    }

    /// Accumulate per-bucket counts in one pass over each event kind
    ///
    /// Events map to their bucket through [`Bucket::of`], which agrees with
    /// [`Bucket::contains`] by construction; events outside every requested
    /// bucket are dropped.
    fn collect_buckets(
        &self,
        filter: &FilterSet,
        buckets: &[Bucket],
        granularity: Granularity,
    ) -> Vec<WindowCounts> {
        let store = self.state.store();
        let criteria = self.state.criteria();

        let mut counts: Vec<WindowCounts> = buckets.iter().map(|_| WindowCounts::default()).collect();
        let index: HashMap<Bucket, usize> = buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| (*bucket, i))
            .collect();

        for impression in store.impressions() {
            let slot = match index.get(&Bucket::of(impression.timestamp, granularity)) {
                Some(slot) => *slot,
                None => continue,
            };
            if !filter.matches(
                impression.gender,
                impression.age,
                impression.income,
                impression.context,
            ) {
                continue;
            }
            let counts = &mut counts[slot];
            counts.impressions += 1;
            counts.impression_cost += impression.cost;
            if !counts.unique_users.contains(&impression.user_id) {
                counts.unique_users.insert(impression.user_id.clone());
            }
        }

        for click in store.clicks() {
            let slot = match index.get(&Bucket::of(click.timestamp, granularity)) {
                Some(slot) => *slot,
                None => continue,
            };
            if !filter.matches_attributes(store.user_attributes(&click.user_id)) {
                continue;
            }
            counts[slot].clicks += 1;
            counts[slot].click_cost += click.cost;
        }

        for session in store.sessions() {
            let slot = match index.get(&Bucket::of(session.entry, granularity)) {
                Some(slot) => *slot,
                None => continue,
            };
            if !filter.matches_attributes(store.user_attributes(&session.user_id)) {
                continue;
            }
            let counts = &mut counts[slot];
            counts.sessions += 1;
            if session.conversion {
                counts.conversions += 1;
            }
            if criteria.is_bounce(session) {
                counts.bounces += 1;
            }
        }

        counts
    }
}
