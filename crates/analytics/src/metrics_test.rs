//! Tests for metric kinds and derivation

use crate::metrics::{Metric, MetricTotals, WindowCounts};

#[test]
fn test_metric_parse() {
    assert_eq!(Metric::parse("impressions").unwrap(), Metric::Impressions);
    assert_eq!(Metric::parse("clicks").unwrap(), Metric::Clicks);
    assert_eq!(Metric::parse("uniques").unwrap(), Metric::Uniques);
    assert_eq!(Metric::parse("bounces").unwrap(), Metric::Bounces);
    assert_eq!(Metric::parse("conversions").unwrap(), Metric::Conversions);
    assert_eq!(Metric::parse("total_cost").unwrap(), Metric::TotalCost);
    assert_eq!(Metric::parse("cost").unwrap(), Metric::TotalCost);
    assert_eq!(Metric::parse("CTR").unwrap(), Metric::Ctr);
    assert_eq!(Metric::parse("cpc").unwrap(), Metric::Cpc);
    assert_eq!(Metric::parse("cpa").unwrap(), Metric::Cpa);
    assert_eq!(Metric::parse("cpm").unwrap(), Metric::Cpm);
    assert_eq!(Metric::parse("bounce_rate").unwrap(), Metric::BounceRate);
    assert_eq!(Metric::parse("bounce-rate").unwrap(), Metric::BounceRate);
}

#[test]
fn test_metric_parse_invalid() {
    assert!(Metric::parse("roi").is_err());
    assert!(Metric::parse("").is_err());
}

#[test]
fn test_metric_name_round_trip() {
    for metric in Metric::ALL {
        assert_eq!(Metric::parse(metric.as_str()).unwrap(), metric);
    }
}

#[test]
fn test_metric_families() {
    assert!(Metric::Ctr.is_ratio());
    assert!(Metric::BounceRate.is_ratio());
    assert!(!Metric::Impressions.is_ratio());

    assert!(Metric::TotalCost.is_cost());
    assert!(Metric::Cpm.is_cost());
    assert!(!Metric::Ctr.is_cost());
    assert!(!Metric::Uniques.is_cost());
}

#[test]
fn test_zero_denominators_yield_exactly_zero() {
    // nonzero costs, but every denominator count is zero
    let counts = WindowCounts {
        impression_cost: 12.5,
        click_cost: 3.25,
        ..WindowCounts::default()
    };

    assert_eq!(counts.value(Metric::Ctr), 0.0);
    assert_eq!(counts.value(Metric::Cpc), 0.0);
    assert_eq!(counts.value(Metric::Cpa), 0.0);
    assert_eq!(counts.value(Metric::Cpm), 0.0);
    assert_eq!(counts.value(Metric::BounceRate), 0.0);
    // the cost sum itself is unaffected by the guards
    assert_eq!(counts.value(Metric::TotalCost), 15.75);
}

#[test]
fn test_ratio_formulas() {
    let counts = WindowCounts {
        impressions: 200,
        clicks: 10,
        conversions: 2,
        sessions: 40,
        bounces: 10,
        impression_cost: 90.0,
        click_cost: 10.0,
        ..WindowCounts::default()
    };

    assert_eq!(counts.value(Metric::Ctr), 5.0); // 10/200 x 100
    assert_eq!(counts.value(Metric::Cpc), 10.0); // 100/10
    assert_eq!(counts.value(Metric::Cpa), 50.0); // 100/2
    assert_eq!(counts.value(Metric::Cpm), 500.0); // 100/200 x 1000
    assert_eq!(counts.value(Metric::BounceRate), 25.0); // 10/40 x 100
}

#[test]
fn test_uniques_deduplicate() {
    let mut counts = WindowCounts::default();
    counts.unique_users.insert("u1".to_string());
    counts.unique_users.insert("u1".to_string());
    counts.unique_users.insert("u2".to_string());

    assert_eq!(counts.value(Metric::Uniques), 2.0);
}

#[test]
fn test_totals_mirror_counts() {
    let mut counts = WindowCounts {
        impressions: 100,
        clicks: 25,
        conversions: 5,
        sessions: 20,
        bounces: 4,
        impression_cost: 40.0,
        click_cost: 10.0,
        ..WindowCounts::default()
    };
    counts.unique_users.insert("u1".to_string());

    let totals = MetricTotals::from_counts(&counts);
    assert_eq!(totals.impressions, 100);
    assert_eq!(totals.uniques, 1);
    assert_eq!(totals.total_cost, 50.0);
    assert_eq!(totals.ctr, 25.0);
    assert_eq!(totals.bounce_rate, 20.0);

    for metric in Metric::ALL {
        assert_eq!(totals.value(metric), counts.value(metric));
    }
}
