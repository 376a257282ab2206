//! Click-cost histogram configuration

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Histogram configuration
///
/// # Example
///
/// ```toml
/// [histogram]
/// bins = 10
/// ```
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistogramConfig {
    /// Number of equal-width bins
    /// Default: 10
    pub bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bins: 10 }
    }
}

impl HistogramConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.bins < 1 {
            return Err(ConfigError::invalid_value(
                "histogram",
                "bins",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bins() {
        assert_eq!(HistogramConfig::default().bins, 10);
    }

    #[test]
    fn test_validate_rejects_zero_bins() {
        let config = HistogramConfig { bins: 0 };
        assert!(config.validate().is_err());
    }
}
