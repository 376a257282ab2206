//! Date range handling
//!
//! Queries restrict bucketed series to an inclusive `[start, end]` calendar
//! date range. Custom ranges parse from `YYYY-MM-DD,YYYY-MM-DD`.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{AnalyticsError, Result};

/// An inclusive calendar date range for series queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AnalyticsError::InvalidDateRange(
                "end must not be before start".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Create a single-day range
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parse a date range string
    ///
    /// Format: `2025-03-01,2025-03-14`. A single date is accepted as a
    /// one-day range.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(',') {
            Some((start, end)) => {
                let start = parse_date(start.trim())?;
                let end = parse_date(end.trim())?;
                Self::new(start, end)
            }
            None => Ok(Self::single(parse_date(s)?)),
        }
    }

    /// Range covering the calendar days of two timestamps
    ///
    /// Used to derive a whole-campaign default range from the event span.
    pub fn from_span(first: DateTime<Utc>, last: DateTime<Utc>) -> Result<Self> {
        Self::new(first.date_naive(), last.date_naive())
    }

    /// Number of calendar days in this range (inclusive)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether a timestamp falls on a day inside the range
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        self.start <= date && date <= self.end
    }

    /// Iterate the calendar days of the range in order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let mut current = self.start;
        std::iter::from_fn(move || {
            if current > end {
                return None;
            }
            let date = current;
            current = date + Duration::days(1);
            Some(date)
        })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AnalyticsError::InvalidDateRange(format!("invalid date: '{}' (use YYYY-MM-DD)", s))
    })
}
