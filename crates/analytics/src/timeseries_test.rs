//! Tests for time series and export table types

use crate::metrics::Metric;
use crate::timeseries::{MetricTable, TableRow, TimeSeries, TimeSeriesPoint};

#[test]
fn test_point_new() {
    let point = TimeSeriesPoint::new("2025-03-01", 100.0);
    assert_eq!(point.bucket, "2025-03-01");
    assert_eq!(point.value, 100.0);
}

#[test]
fn test_empty_series() {
    let series = TimeSeries::empty();
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert_eq!(series.total, 0.0);
    assert_eq!(series.min, 0.0);
    assert_eq!(series.max, 0.0);
    assert_eq!(series.avg, 0.0);
}

#[test]
fn test_from_points_calculates_stats() {
    let series = TimeSeries::from_points(vec![
        TimeSeriesPoint::new("2025-03-01", 10.0),
        TimeSeriesPoint::new("2025-03-02", 30.0),
        TimeSeriesPoint::new("2025-03-03", 20.0),
    ]);

    assert_eq!(series.len(), 3);
    assert_eq!(series.total, 60.0);
    assert_eq!(series.min, 10.0);
    assert_eq!(series.max, 30.0);
    assert_eq!(series.avg, 20.0);
}

#[test]
fn test_from_points_preserves_order() {
    let series = TimeSeries::from_points(vec![
        TimeSeriesPoint::new("2025-03-02", 2.0),
        TimeSeriesPoint::new("2025-03-01", 1.0),
    ]);
    let buckets: Vec<&str> = series.points.iter().map(|p| p.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["2025-03-02", "2025-03-01"]);
}

#[test]
fn test_table_header() {
    let table = MetricTable::new(
        vec![Metric::Impressions, Metric::Ctr],
        vec![TableRow {
            bucket: "2025-03-01".to_string(),
            values: vec![10.0, 50.0],
        }],
    );

    assert_eq!(table.header(), vec!["bucket", "impressions", "ctr"]);
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
}

#[test]
fn test_table_serializes_to_json() {
    let table = MetricTable::new(
        vec![Metric::Clicks],
        vec![TableRow {
            bucket: "2025-03-01".to_string(),
            values: vec![3.0],
        }],
    );

    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"clicks\""));
    assert!(json.contains("2025-03-01"));
}
