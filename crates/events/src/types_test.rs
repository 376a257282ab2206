//! Tests for event and attribute types

use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::types::{AgeRange, Context, Gender, Income, Session};

fn ts(s: &str) -> chrono::DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

#[test]
fn test_gender_parse() {
    assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
    assert_eq!(Gender::parse("female").unwrap(), Gender::Female);
    assert_eq!(Gender::parse(" Male ").unwrap(), Gender::Male);
    assert_eq!(Gender::parse("").unwrap(), Gender::Unknown);
}

#[test]
fn test_gender_parse_invalid() {
    assert!(Gender::parse("other").is_err());
}

#[test]
fn test_age_range_parse() {
    assert_eq!(AgeRange::parse("<25").unwrap(), AgeRange::Under25);
    assert_eq!(AgeRange::parse("25-34").unwrap(), AgeRange::From25To34);
    assert_eq!(AgeRange::parse("35-44").unwrap(), AgeRange::From35To44);
    assert_eq!(AgeRange::parse("45-54").unwrap(), AgeRange::From45To54);
    assert_eq!(AgeRange::parse(">54").unwrap(), AgeRange::Over54);
}

#[test]
fn test_age_range_parse_invalid() {
    assert!(AgeRange::parse("25-35").is_err());
    assert!(AgeRange::parse("55+").is_err());
}

#[test]
fn test_income_parse() {
    assert_eq!(Income::parse("Low").unwrap(), Income::Low);
    assert_eq!(Income::parse("medium").unwrap(), Income::Medium);
    assert_eq!(Income::parse("HIGH").unwrap(), Income::High);
}

#[test]
fn test_context_parse() {
    assert_eq!(Context::parse("News").unwrap(), Context::News);
    assert_eq!(Context::parse("Social Media").unwrap(), Context::SocialMedia);
    assert_eq!(Context::parse("social_media").unwrap(), Context::SocialMedia);
    assert_eq!(Context::parse("Shopping").unwrap(), Context::Shopping);
    assert!(Context::parse("Gaming").is_err());
}

#[test]
fn test_token_round_trip() {
    for age in AgeRange::ALL {
        assert_eq!(AgeRange::parse(age.as_str()).unwrap(), age);
    }
    for context in Context::ALL {
        assert_eq!(Context::parse(context.as_str()).unwrap(), context);
    }
    for income in Income::ALL {
        assert_eq!(Income::parse(income.as_str()).unwrap(), income);
    }
    for gender in Gender::ALL {
        assert_eq!(Gender::parse(gender.as_str()).unwrap(), gender);
    }
}

#[test]
fn test_unknown_token_error_names_field() {
    let err = Gender::parse("abc").unwrap_err();
    assert!(err.to_string().contains("gender"));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_session_duration() {
    let session = Session::new(
        ts("2025-03-01 10:00:00"),
        Some(ts("2025-03-01 10:00:03")),
        1,
        false,
        "u1",
    );
    assert_eq!(session.duration().unwrap().num_seconds(), 3);
}

#[test]
fn test_open_session_has_no_duration() {
    let session = Session::new(ts("2025-03-01 10:00:00"), None, 5, true, "u1");
    assert!(session.duration().is_none());
}

#[test]
fn test_timestamps_compare_chronologically() {
    let earlier = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let later = ts("2025-03-01 10:00:00");
    assert!(earlier < later);
}
