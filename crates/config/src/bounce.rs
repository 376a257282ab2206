//! Bounce criteria configuration
//!
//! Configures the default bounce classification a campaign starts with.
//! The CLI can override individual values per invocation.

use serde::Deserialize;

use adlens_events::BounceCriteria;

use crate::error::{ConfigError, Result};

/// Bounce classification configuration
///
/// # Example
///
/// ```toml
/// [bounce]
/// min_pages_viewed = 2
/// min_time_on_site_secs = 4
/// consider_pages_viewed = true
/// consider_time_on_site = true
/// ```
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BounceConfig {
    /// Sessions viewing fewer pages than this bounce
    /// Default: 2
    pub min_pages_viewed: u32,
    /// Sessions shorter than this many seconds bounce
    /// Default: 4
    pub min_time_on_site_secs: i64,
    /// Whether the pages-viewed criterion is enabled
    /// Default: true
    pub consider_pages_viewed: bool,
    /// Whether the time-on-site criterion is enabled
    /// Default: true
    pub consider_time_on_site: bool,
}

impl Default for BounceConfig {
    fn default() -> Self {
        let criteria = BounceCriteria::default();
        Self {
            min_pages_viewed: criteria.min_pages_viewed,
            min_time_on_site_secs: criteria.min_time_on_site_secs,
            consider_pages_viewed: criteria.consider_pages_viewed,
            consider_time_on_site: criteria.consider_time_on_site,
        }
    }
}

impl BounceConfig {
    /// Check thresholds are meaningful
    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_pages_viewed < 1 {
            return Err(ConfigError::invalid_value(
                "bounce",
                "min_pages_viewed",
                "must be at least 1",
            ));
        }
        if self.min_time_on_site_secs < 1 {
            return Err(ConfigError::invalid_value(
                "bounce",
                "min_time_on_site_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Convert into the criteria value the engine evaluates under
    pub fn to_criteria(self) -> BounceCriteria {
        BounceCriteria {
            min_pages_viewed: self.min_pages_viewed,
            min_time_on_site_secs: self.min_time_on_site_secs,
            consider_pages_viewed: self.consider_pages_viewed,
            consider_time_on_site: self.consider_time_on_site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = BounceConfig::default();
        assert_eq!(config.to_criteria(), BounceCriteria::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: BounceConfig = toml::from_str("min_pages_viewed = 3").unwrap();
        assert_eq!(config.min_pages_viewed, 3);
        assert_eq!(config.min_time_on_site_secs, 4);
        assert!(config.consider_time_on_site);
    }

    #[test]
    fn test_validate_rejects_zero_thresholds() {
        let config = BounceConfig {
            min_pages_viewed: 0,
            ..BounceConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BounceConfig {
            min_time_on_site_secs: 0,
            ..BounceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
