//! Time bucketing
//!
//! Maps timestamps to hourly / daily / weekly bucket labels and enumerates
//! the labels of a date range. [`Bucket::of`] and [`Bucket::contains`] are
//! defined in terms of each other, so membership always agrees with the
//! label a timestamp maps to.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::timerange::DateRange;

/// Time bucketing resolution for series queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per hour of a single day
    Hourly,
    /// One bucket per calendar day
    #[default]
    Daily,
    /// One bucket per ISO week
    Weekly,
}

impl Granularity {
    /// Parse granularity from string
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hourly" | "hour" | "1h" => Ok(Self::Hourly),
            "daily" | "day" | "1d" => Ok(Self::Daily),
            "weekly" | "week" | "1w" => Ok(Self::Weekly),
            _ => Err(AnalyticsError::InvalidGranularity(s.to_string())),
        }
    }

    /// Get the string name of this granularity
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A time-window label under one granularity
///
/// Renders to and parses from a canonical label string:
/// `2025-03-01 10:00` (hourly), `2025-03-01` (daily), `2025-W09` (weekly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// One hour of one calendar day
    Hour {
        /// The day
        date: NaiveDate,
        /// Hour of day, 0-23
        hour: u32,
    },
    /// One calendar day
    Day {
        /// The day
        date: NaiveDate,
    },
    /// One ISO week
    Week {
        /// ISO week-numbering year (differs from the calendar year at
        /// year boundaries)
        year: i32,
        /// ISO week of year, 1-53
        week: u32,
    },
}

impl Bucket {
    /// The bucket a timestamp belongs to under a granularity
    pub fn of(timestamp: DateTime<Utc>, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Hourly => Self::Hour {
                date: timestamp.date_naive(),
                hour: timestamp.hour(),
            },
            Granularity::Daily => Self::Day {
                date: timestamp.date_naive(),
            },
            Granularity::Weekly => {
                let iso = timestamp.date_naive().iso_week();
                Self::Week {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
        }
    }

    /// The granularity this bucket belongs to
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Hour { .. } => Granularity::Hourly,
            Self::Day { .. } => Granularity::Daily,
            Self::Week { .. } => Granularity::Weekly,
        }
    }

    /// Whether a timestamp falls inside this bucket
    ///
    /// Defined as `Bucket::of(timestamp, granularity) == self`, so
    /// membership agrees with [`Bucket::of`] by construction.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        Self::of(timestamp, self.granularity()) == *self
    }

    /// Parse a canonical bucket label under a granularity
    pub fn parse(label: &str, granularity: Granularity) -> Result<Self> {
        let label = label.trim();
        match granularity {
            Granularity::Hourly => NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M")
                .map(|dt| Self::Hour {
                    date: dt.date(),
                    hour: dt.hour(),
                })
                .map_err(|_| AnalyticsError::invalid_label(label, "hourly")),
            Granularity::Daily => NaiveDate::parse_from_str(label, "%Y-%m-%d")
                .map(|date| Self::Day { date })
                .map_err(|_| AnalyticsError::invalid_label(label, "daily")),
            Granularity::Weekly => parse_week_label(label)
                .ok_or_else(|| AnalyticsError::invalid_label(label, "weekly")),
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hour { date, hour } => write!(f, "{} {:02}:00", date.format("%Y-%m-%d"), hour),
            Self::Day { date } => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week { year, week } => write!(f, "{:04}-W{:02}", year, week),
        }
    }
}

/// Enumerate the ordered bucket labels of a date range
///
/// - HOURLY: the 24 hours of the range's **start date only**. Hourly views
///   always show a single day regardless of the range's length; callers
///   wanting another day pass a range starting on it.
/// - DAILY: one bucket per calendar day, start to end inclusive.
/// - WEEKLY: one bucket per ISO week overlapped by the range.
pub fn buckets_for(range: &DateRange, granularity: Granularity) -> Vec<Bucket> {
    match granularity {
        Granularity::Hourly => (0..24)
            .map(|hour| Bucket::Hour {
                date: range.start,
                hour,
            })
            .collect(),
        Granularity::Daily => range.iter_days().map(|date| Bucket::Day { date }).collect(),
        Granularity::Weekly => {
            let mut buckets: Vec<Bucket> = Vec::new();
            for date in range.iter_days() {
                let iso = date.iso_week();
                let bucket = Bucket::Week {
                    year: iso.year(),
                    week: iso.week(),
                };
                if buckets.last() != Some(&bucket) {
                    buckets.push(bucket);
                }
            }
            buckets
        }
    }
}

fn parse_week_label(label: &str) -> Option<Bucket> {
    let (year, week) = label.split_once("-W")?;
    let year: i32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;

    // reject week numbers the ISO calendar does not have for that year
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;

    Some(Bucket::Week { year, week })
}
