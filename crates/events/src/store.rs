//! Append-only event store
//!
//! Holds the parsed events of one campaign in insertion order. Appends are
//! O(1); readers get insertion-ordered slices. The store also maintains a
//! per-user attribute index so that clicks and sessions — which carry no
//! demographics of their own — can be filtered by the attributes first
//! observed for their user in the impression log.
//!
//! The store is filled by ingestion before the campaign is published; after
//! publication it sits behind an `Arc` inside [`crate::CampaignState`] and
//! is never mutated again, so any view obtained from a snapshot is stable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::{AgeRange, Click, Context, Gender, Impression, Income, Session};

/// Demographic attributes recorded for a user id
///
/// Taken from the first impression observed for that user; later impressions
/// do not overwrite the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAttributes {
    /// Viewer gender
    pub gender: Gender,
    /// Viewer age bucket
    pub age: AgeRange,
    /// Viewer income band
    pub income: Income,
    /// Page context of the first impression
    pub context: Context,
}

/// Append-only store for one campaign's events
#[derive(Debug, Default)]
pub struct EventStore {
    impressions: Vec<Impression>,
    clicks: Vec<Click>,
    sessions: Vec<Session>,
    user_attributes: HashMap<String, UserAttributes>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an impression, recording first-seen user attributes
    pub fn push_impression(&mut self, impression: Impression) {
        self.user_attributes
            .entry(impression.user_id.clone())
            .or_insert(UserAttributes {
                gender: impression.gender,
                age: impression.age,
                income: impression.income,
                context: impression.context,
            });
        self.impressions.push(impression);
    }

    /// Append a click
    pub fn push_click(&mut self, click: Click) {
        self.clicks.push(click);
    }

    /// Append a session record
    pub fn push_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// All impressions in insertion order
    pub fn impressions(&self) -> &[Impression] {
        &self.impressions
    }

    /// All clicks in insertion order
    pub fn clicks(&self) -> &[Click] {
        &self.clicks
    }

    /// All sessions in insertion order
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Attributes recorded for a user id, if the user appeared in the
    /// impression log
    pub fn user_attributes(&self, user_id: &str) -> Option<&UserAttributes> {
        self.user_attributes.get(user_id)
    }

    /// Number of distinct users observed in the impression log
    pub fn known_users(&self) -> usize {
        self.user_attributes.len()
    }

    /// Total number of stored events across all three kinds
    pub fn len(&self) -> usize {
        self.impressions.len() + self.clicks.len() + self.sessions.len()
    }

    /// Whether the store holds no events at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Earliest and latest impression timestamps, if any impressions exist
    ///
    /// Used to pick a default query range for a freshly loaded campaign.
    pub fn impression_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.impressions.iter().map(|i| i.timestamp).min()?;
        let last = self.impressions.iter().map(|i| i.timestamp).max()?;
        Some((first, last))
    }
}
