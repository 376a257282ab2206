//! Tests for date range handling

use chrono::NaiveDate;

use crate::timerange::DateRange;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ts(s: &str) -> chrono::DateTime<chrono::Utc> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

#[test]
fn test_parse_custom_range() {
    let range = DateRange::parse("2025-03-01,2025-03-14").unwrap();
    assert_eq!(range.start, date(2025, 3, 1));
    assert_eq!(range.end, date(2025, 3, 14));
    assert_eq!(range.days(), 14);
}

#[test]
fn test_parse_with_spaces() {
    let range = DateRange::parse("  2025-03-01 , 2025-03-02  ").unwrap();
    assert_eq!(range.days(), 2);
}

#[test]
fn test_parse_single_date() {
    let range = DateRange::parse("2025-03-01").unwrap();
    assert_eq!(range.start, range.end);
    assert_eq!(range.days(), 1);
}

#[test]
fn test_parse_invalid() {
    assert!(DateRange::parse("").is_err());
    assert!(DateRange::parse("yesterday").is_err());
    assert!(DateRange::parse("2025-03-01,2025-02-01").is_err());
    assert!(DateRange::parse("01/03/2025,02/03/2025").is_err());
}

#[test]
fn test_new_validates_order() {
    assert!(DateRange::new(date(2025, 3, 2), date(2025, 3, 1)).is_err());
    assert!(DateRange::new(date(2025, 3, 1), date(2025, 3, 1)).is_ok());
}

#[test]
fn test_contains_is_day_based() {
    let range = DateRange::parse("2025-03-01,2025-03-02").unwrap();

    assert!(range.contains(ts("2025-03-01 00:00:00")));
    assert!(range.contains(ts("2025-03-02 23:59:59")));
    assert!(!range.contains(ts("2025-02-28 23:59:59")));
    assert!(!range.contains(ts("2025-03-03 00:00:00")));
}

#[test]
fn test_iter_days() {
    let range = DateRange::parse("2025-02-27,2025-03-02").unwrap();
    let days: Vec<NaiveDate> = range.iter_days().collect();
    assert_eq!(
        days,
        vec![
            date(2025, 2, 27),
            date(2025, 2, 28),
            date(2025, 3, 1),
            date(2025, 3, 2),
        ]
    );
}

#[test]
fn test_iter_days_single() {
    let range = DateRange::single(date(2025, 3, 1));
    assert_eq!(range.iter_days().count(), 1);
}

#[test]
fn test_from_span() {
    let range =
        DateRange::from_span(ts("2025-03-01 10:00:00"), ts("2025-03-05 09:00:00")).unwrap();
    assert_eq!(range.start, date(2025, 3, 1));
    assert_eq!(range.end, date(2025, 3, 5));
}
