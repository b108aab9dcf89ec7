//! Types for planetary hour (hora) results.

use chrono::{DateTime, Utc};
use sasana_panchang::Planet;
use serde::Serialize;

/// Number of horas in a sunrise-to-sunrise day (12 day + 12 night).
pub const HORA_COUNT: u8 = 24;

/// Horas between sunrise and sunset.
pub const DAY_HORA_COUNT: u8 = 12;

/// One planetary hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoraSegment {
    /// 1-based position within the day (1..=24).
    pub hora_number: u8,
    /// Ruling planet.
    pub planet: Planet,
    /// Start of this hora (UTC).
    pub start: DateTime<Utc>,
    /// End of this hora (UTC).
    pub end: DateTime<Utc>,
    /// Between sunrise and sunset.
    pub is_day_hora: bool,
    /// Contains the `now` instant the horas were computed with.
    pub is_current: bool,
    /// Index of `planet` in the Chaldean order (0=Saturn .. 6=Moon).
    pub ruler_index: u8,
}

impl HoraSegment {
    /// Whether `t` falls in `[start, end)`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}
