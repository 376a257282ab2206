//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid date range
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    /// Invalid granularity
    #[error("invalid granularity: {0}")]
    InvalidGranularity(String),

    /// A bucket label did not match the active granularity's pattern
    #[error("invalid {granularity} bucket label: '{label}'")]
    InvalidBucketLabel {
        /// The offending label
        label: String,
        /// Granularity the label was parsed under
        granularity: &'static str,
    },

    /// Unknown metric name
    #[error("invalid metric: {0}")]
    InvalidMetric(String),
}

impl AnalyticsError {
    /// Create an InvalidBucketLabel error
    pub fn invalid_label(label: impl Into<String>, granularity: &'static str) -> Self {
        Self::InvalidBucketLabel {
            label: label.into(),
            granularity,
        }
    }
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
