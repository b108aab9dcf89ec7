//! Runtime configuration for the cache and the upcoming-festival scan.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [cache]
//! capacity = 500
//! coordinate_decimals = 4
//!
//! [scan]
//! window_days = 365
//! yield_every_days = 10
//! yield_pause_ms = 1
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Bounds of the [`EphemerisCache`](crate::EphemerisCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum entries held before the oldest insertion is evicted.
    pub capacity: usize,
    /// Decimal places kept from latitude/longitude when forming keys.
    pub coordinate_decimals: u32,
}

impl CacheConfig {
    pub const DEFAULT_CAPACITY: usize = 500;
    pub const DEFAULT_COORDINATE_DECIMALS: u32 = 4;

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid(
                "cache.capacity must be greater than zero",
            ));
        }
        if self.coordinate_decimals > 9 {
            return Err(ConfigError::Invalid(
                "cache.coordinate_decimals must be at most 9",
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            coordinate_decimals: Self::DEFAULT_COORDINATE_DECIMALS,
        }
    }
}

/// Parameters of the upcoming-festival scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Default window length in days.
    pub window_days: u32,
    /// The async scan yields to the runtime after this many days.
    pub yield_every_days: u32,
    /// Length of each pause in milliseconds; 0 yields without sleeping.
    pub yield_pause_ms: u64,
}

impl ScanConfig {
    /// Pause inserted at each yield point.
    pub fn yield_pause(&self) -> Duration {
        Duration::from_millis(self.yield_pause_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.yield_every_days == 0 {
            return Err(ConfigError::Invalid(
                "scan.yield_every_days must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_days: 365,
            yield_every_days: 10,
            yield_pause_ms: 1,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub cache: CacheConfig,
    pub scan: ScanConfig,
}

impl CalendarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()?;
        self.scan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = CalendarConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.cache.capacity, 500);
        assert_eq!(config.scan.yield_every_days, 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CalendarConfig::from_toml_str("[scan]\nyield_pause_ms = 0\n").unwrap();
        assert_eq!(config.scan.yield_pause(), Duration::ZERO);
        assert_eq!(config.scan.window_days, 365);
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = CalendarConfig::from_toml_str("[cache]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_yield_interval_rejected() {
        let err = CalendarConfig::from_toml_str("[scan]\nyield_every_days = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = CalendarConfig::from_toml_str("[cache\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
