//! Time series and export table types
//!
//! Query results keyed by bucket label, in chronological bucket order.

use serde::{Deserialize, Serialize};

use crate::metrics::Metric;

/// A single data point in a time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Bucket label of this point
    pub bucket: String,
    /// The computed metric value
    pub value: f64,
}

impl TimeSeriesPoint {
    /// Create a new point
    pub fn new(bucket: impl Into<String>, value: f64) -> Self {
        Self {
            bucket: bucket.into(),
            value,
        }
    }
}

/// Time series data with aggregated statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Data points in chronological bucket order
    pub points: Vec<TimeSeriesPoint>,
    /// Sum of all values
    pub total: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Average value
    pub avg: f64,
}

impl TimeSeries {
    /// Create an empty time series
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            total: 0.0,
            min: 0.0,
            max: 0.0,
            avg: 0.0,
        }
    }

    /// Create a time series from points, calculating stats
    pub fn from_points(points: Vec<TimeSeriesPoint>) -> Self {
        if points.is_empty() {
            return Self::empty();
        }

        let total: f64 = points.iter().map(|p| p.value).sum();
        let min = points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min);
        let max = points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let avg = total / points.len() as f64;

        Self {
            points,
            total,
            min,
            max,
            avg,
        }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// One row of a metric table: a bucket label and one value per metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Bucket label of this row
    pub bucket: String,
    /// Metric values, in the table's column order
    pub values: Vec<f64>,
}

/// A bucketed table with one column per selected metric
///
/// The series shape behind CSV/JSON export: rows are bucket labels in
/// chronological order, columns are the requested metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTable {
    /// Metrics, one per value column
    pub metrics: Vec<Metric>,
    /// Rows in chronological bucket order
    pub rows: Vec<TableRow>,
}

impl MetricTable {
    /// Create a table from its columns and rows
    pub fn new(metrics: Vec<Metric>, rows: Vec<TableRow>) -> Self {
        Self { metrics, rows }
    }

    /// Header names: `bucket` followed by one name per metric column
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = vec!["bucket"];
        header.extend(self.metrics.iter().map(|m| m.as_str()));
        header
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
