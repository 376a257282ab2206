//! Adlens Event Model
//!
//! Core data types for campaign analytics:
//!
//! - **Events**: the three record kinds parsed from campaign logs
//!   (impressions, clicks, server sessions)
//! - **Attributes**: demographic enums attached to impressions
//! - **Bounce**: configurable session bounce classification
//! - **Store**: append-only event store with a per-user attribute index
//! - **Campaign**: the loaded-campaign aggregate with atomic snapshot swaps
//!
//! Events are immutable once appended. The store is populated once per
//! campaign load and read-only afterwards; queries run against an
//! `Arc<CampaignState>` snapshot that never observes later swaps.

pub mod bounce;
pub mod campaign;
pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod campaign_test;
#[cfg(test)]
mod store_test;
#[cfg(test)]
mod types_test;

// Re-exports for convenience
pub use bounce::BounceCriteria;
pub use campaign::{Campaign, CampaignState};
pub use error::{EventError, Result};
pub use store::{EventStore, UserAttributes};
pub use types::{AgeRange, Click, Context, Gender, Impression, Income, Session};
