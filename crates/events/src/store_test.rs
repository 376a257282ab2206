//! Tests for the event store

use chrono::{NaiveDateTime, Utc};

use crate::store::EventStore;
use crate::types::{AgeRange, Click, Context, Gender, Impression, Income, Session};

fn ts(s: &str) -> chrono::DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

fn impression(time: &str, user: &str, gender: Gender) -> Impression {
    Impression::new(
        ts(time),
        user,
        gender,
        AgeRange::From25To34,
        Income::Medium,
        Context::News,
        0.5,
    )
}

#[test]
fn test_append_preserves_insertion_order() {
    let mut store = EventStore::new();
    store.push_impression(impression("2025-03-02 09:00:00", "u2", Gender::Female));
    store.push_impression(impression("2025-03-01 10:00:00", "u1", Gender::Male));

    let users: Vec<&str> = store
        .impressions()
        .iter()
        .map(|i| i.user_id.as_str())
        .collect();
    assert_eq!(users, vec!["u2", "u1"]);
}

#[test]
fn test_empty_store() {
    let store = EventStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.impression_span().is_none());
}

#[test]
fn test_len_counts_all_kinds() {
    let mut store = EventStore::new();
    store.push_impression(impression("2025-03-01 10:00:00", "u1", Gender::Male));
    store.push_click(Click::new(ts("2025-03-01 10:00:00"), "u1", 0.3));
    store.push_session(Session::new(ts("2025-03-01 10:00:00"), None, 1, false, "u1"));
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn test_user_attributes_first_impression_wins() {
    let mut store = EventStore::new();
    store.push_impression(impression("2025-03-01 10:00:00", "u1", Gender::Male));
    store.push_impression(impression("2025-03-01 11:00:00", "u1", Gender::Female));

    let attrs = store.user_attributes("u1").unwrap();
    assert_eq!(attrs.gender, Gender::Male);
    assert_eq!(store.known_users(), 1);
}

#[test]
fn test_user_attributes_missing_for_unseen_user() {
    let mut store = EventStore::new();
    store.push_click(Click::new(ts("2025-03-01 10:00:00"), "ghost", 0.3));
    assert!(store.user_attributes("ghost").is_none());
}

#[test]
fn test_impression_span() {
    let mut store = EventStore::new();
    store.push_impression(impression("2025-03-02 09:00:00", "u2", Gender::Female));
    store.push_impression(impression("2025-03-01 10:00:00", "u1", Gender::Male));
    store.push_impression(impression("2025-03-05 23:59:59", "u3", Gender::Male));

    let (first, last) = store.impression_span().unwrap();
    assert_eq!(first, ts("2025-03-01 10:00:00"));
    assert_eq!(last, ts("2025-03-05 23:59:59"));
}
