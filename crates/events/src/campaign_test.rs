//! Tests for the campaign aggregate

use chrono::{NaiveDateTime, Utc};

use crate::bounce::BounceCriteria;
use crate::campaign::{Campaign, CampaignState};
use crate::store::EventStore;
use crate::types::{AgeRange, Context, Gender, Impression, Income};

fn ts(s: &str) -> chrono::DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

fn one_impression_store() -> EventStore {
    let mut store = EventStore::new();
    store.push_impression(Impression::new(
        ts("2025-03-01 10:00:00"),
        "u1",
        Gender::Male,
        AgeRange::Under25,
        Income::High,
        Context::Blog,
        1.0,
    ));
    store
}

#[test]
fn test_snapshot_survives_replace() {
    let campaign = Campaign::new(CampaignState::new(
        one_impression_store(),
        BounceCriteria::default(),
    ));

    let before = campaign.snapshot();
    campaign.replace(CampaignState::empty());
    let after = campaign.snapshot();

    // the old snapshot still sees the old events
    assert_eq!(before.store().impressions().len(), 1);
    assert_eq!(after.store().impressions().len(), 0);
}

#[test]
fn test_update_criteria_keeps_events() {
    let campaign = Campaign::new(CampaignState::new(
        one_impression_store(),
        BounceCriteria::default(),
    ));

    let new_criteria = BounceCriteria {
        min_pages_viewed: 7,
        ..BounceCriteria::default()
    };
    campaign.update_bounce_criteria(new_criteria);

    let snapshot = campaign.snapshot();
    assert_eq!(snapshot.criteria().min_pages_viewed, 7);
    assert_eq!(snapshot.store().impressions().len(), 1);
}

#[test]
fn test_clear_resets_to_empty_defaults() {
    let campaign = Campaign::new(CampaignState::new(
        one_impression_store(),
        BounceCriteria {
            min_pages_viewed: 9,
            ..BounceCriteria::default()
        },
    ));

    campaign.clear();

    let snapshot = campaign.snapshot();
    assert!(snapshot.store().is_empty());
    assert_eq!(snapshot.criteria(), BounceCriteria::default());
}

#[test]
fn test_concurrent_readers_share_one_snapshot() {
    let campaign = Campaign::new(CampaignState::new(
        one_impression_store(),
        BounceCriteria::default(),
    ));

    let a = campaign.snapshot();
    let b = campaign.snapshot();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}
