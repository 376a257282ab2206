//! Event model error types

use thiserror::Error;

/// Result type for event model operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors raised by the event model
#[derive(Debug, Error)]
pub enum EventError {
    /// A log token did not match any known attribute value
    #[error("unknown {field} token: '{token}'")]
    UnknownToken {
        /// Attribute the token was parsed for (e.g. "gender")
        field: &'static str,
        /// The offending token
        token: String,
    },

    /// A cost field was negative
    #[error("negative {field} cost: {value}")]
    NegativeCost {
        /// Which cost field (e.g. "impression")
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl EventError {
    /// Create an UnknownToken error
    pub fn unknown_token(field: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            field,
            token: token.into(),
        }
    }
}
