//! Adlens Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use adlens_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[bounce]\nmin_pages_viewed = 3").unwrap();
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [bounce]
//! min_pages_viewed = 2
//! min_time_on_site_secs = 4
//! consider_pages_viewed = true
//! consider_time_on_site = true
//!
//! [histogram]
//! bins = 10
//! ```

mod bounce;
mod error;
mod histogram;
mod logging;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use bounce::BounceConfig;
pub use error::{ConfigError, Result};
pub use histogram::HistogramConfig;
pub use logging::{LogConfig, LogLevel};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Default bounce classification for a loaded campaign
    pub bounce: BounceConfig,

    /// Click-cost histogram shape
    pub histogram: HistogramConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks that bounce thresholds and the histogram bin count are at
    /// least 1.
    fn validate(&self) -> Result<()> {
        self.bounce.validate()?;
        self.histogram.validate()?;
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.bounce.min_pages_viewed, 2);
        assert_eq!(config.histogram.bins, 10);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[log]
level = "debug"

[bounce]
min_pages_viewed = 3
min_time_on_site_secs = 10
consider_pages_viewed = true
consider_time_on_site = false

[histogram]
bins = 25
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.bounce.min_pages_viewed, 3);
        assert_eq!(config.bounce.min_time_on_site_secs, 10);
        assert!(!config.bounce.consider_time_on_site);
        assert_eq!(config.histogram.bins, 25);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let result = Config::from_str("[bounce]\nmin_pages_viewed = 0");
        assert!(result.is_err());
        let result = Config::from_str("[histogram]\nbins = 0");
        assert!(result.is_err());
    }
}
