//! Ingestion error types

use std::io;
use thiserror::Error;

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors raised while loading campaign logs
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read a log file
    #[error("failed to read log file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The CSV structure itself was malformed
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// A row held an unparseable or invalid field
    #[error("{log} log row {row}: {message}")]
    Row {
        /// Which log the row came from (e.g. "impression")
        log: &'static str,
        /// 1-based data row number (excluding the header)
        row: usize,
        /// What was wrong with the row
        message: String,
    },
}

impl IngestError {
    /// Create a row error
    pub fn row(log: &'static str, row: usize, message: impl Into<String>) -> Self {
        Self::Row {
            log,
            row,
            message: message.into(),
        }
    }
}
