//! Bounce classification
//!
//! A session is a bounce when **any enabled** criterion is violated: too few
//! pages viewed, or too little time on site. The OR policy is intentional —
//! enabling both criteria makes the classification stricter, not looser.
//! With both criteria disabled no session is ever a bounce.

use serde::{Deserialize, Serialize};

use crate::types::Session;

/// Thresholds and switches for bounce classification
///
/// Owned by the campaign aggregate; replaced wholesale through
/// [`crate::Campaign::update_bounce_criteria`]. Metric queries re-evaluate
/// every session under the current criteria — classifications are never
/// cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceCriteria {
    /// Sessions viewing fewer pages than this bounce (when considered)
    pub min_pages_viewed: u32,
    /// Sessions shorter than this bounce (when considered)
    pub min_time_on_site_secs: i64,
    /// Whether the pages-viewed criterion is enabled
    pub consider_pages_viewed: bool,
    /// Whether the time-on-site criterion is enabled
    pub consider_time_on_site: bool,
}

impl Default for BounceCriteria {
    fn default() -> Self {
        Self {
            min_pages_viewed: 2,
            min_time_on_site_secs: 4,
            consider_pages_viewed: true,
            consider_time_on_site: true,
        }
    }
}

impl BounceCriteria {
    /// Classify a session under these criteria
    ///
    /// An open session (`exit == None`) has unknown duration and cannot
    /// confirm the minimum time was met, so it bounces on the time dimension
    /// whenever that dimension is considered.
    pub fn is_bounce(&self, session: &Session) -> bool {
        let pages_bounce =
            self.consider_pages_viewed && session.pages_viewed < self.min_pages_viewed;

        let time_bounce = self.consider_time_on_site
            && match session.duration() {
                None => true,
                Some(duration) => duration.num_seconds() < self.min_time_on_site_secs,
            };

        pages_bounce || time_bounce
    }
}
