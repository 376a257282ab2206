//! Adlens Analytics Engine
//!
//! In-memory aggregation over a loaded campaign's events.
//!
//! # Overview
//!
//! This crate is the query side of Adlens, built on top of `adlens-events`.
//! It includes:
//!
//! - **Filters**: multi-select demographic filter sets
//! - **Buckets**: hourly / daily / weekly time bucketing over a date range
//! - **Metrics**: count, cost, and ratio metrics with exact zero-guards
//! - **Engine**: totals, time series, export tables, and cost histograms
//!   computed against one immutable campaign snapshot
//!
//! # Usage
//!
//! ```ignore
//! use adlens_analytics::{AnalyticsEngine, DateRange, FilterSet, Granularity, Metric};
//! use adlens_events::Gender;
//!
//! let filter = FilterSet::none().with_gender(Gender::Female);
//! let range = DateRange::parse("2025-03-01,2025-03-14")?;
//!
//! let snapshot = campaign.snapshot();
//! let engine = AnalyticsEngine::new(&snapshot);
//!
//! let totals = engine.totals(&filter);
//! let ctr = engine.series(Metric::Ctr, &filter, &range, Granularity::Daily);
//! ```
//!
//! All queries are synchronous, CPU-bound traversals. Concurrent queries
//! against the same snapshot are safe because the snapshot is immutable.

pub mod bucket;
pub mod engine;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod timerange;
pub mod timeseries;

#[cfg(test)]
mod metrics_test;
#[cfg(test)]
mod timerange_test;
#[cfg(test)]
mod timeseries_test;

// Re-exports for convenience
pub use bucket::{buckets_for, Bucket, Granularity};
pub use engine::AnalyticsEngine;
pub use error::{AnalyticsError, Result};
pub use filter::FilterSet;
pub use metrics::{HistogramBin, Metric, MetricTotals};
pub use timerange::DateRange;
pub use timeseries::{MetricTable, TableRow, TimeSeries, TimeSeriesPoint};
