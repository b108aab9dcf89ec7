//! Error types for ephemeris access and configuration.

use chrono::NaiveDate;

/// Errors surfaced by an [`EphemerisProvider`](crate::EphemerisProvider)
/// or by snapshot validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider failed for its own reasons (bad coordinates, missing data).
    #[error("ephemeris provider error: {0}")]
    Provider(String),

    /// The provider holds no snapshot for the requested date.
    #[error("no panchangam available for {date}")]
    Unavailable {
        /// The date that could not be resolved.
        date: NaiveDate,
    },

    /// Sunrise tithi outside 0..=29.
    #[error("invalid tithi index: {0} (must be 0..=29)")]
    InvalidTithi(u8),

    /// Masa index outside 0..=11.
    #[error("invalid masa index: {0} (must be 0..=11)")]
    InvalidMasa(u8),

    /// Weekday index outside 0..=6.
    #[error("invalid vaar index: {0} (must be 0..=6)")]
    InvalidVaar(u8),
}

/// Errors from loading or validating a [`CalendarConfig`](crate::CalendarConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed.
    #[error("invalid config toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
