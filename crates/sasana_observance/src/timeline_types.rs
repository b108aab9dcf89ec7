//! View-model types for the daily timeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Panchang element shown on one timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimelineCategory {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    Weekday,
}

impl TimelineCategory {
    /// Row order, top to bottom.
    pub const ALL: [Self; 5] = [
        Self::Tithi,
        Self::Nakshatra,
        Self::Yoga,
        Self::Karana,
        Self::Weekday,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "Tithi",
            Self::Nakshatra => "Nakshatra",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
            Self::Weekday => "Vaar",
        }
    }
}

/// One bar on a timeline row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSegment {
    /// Element index (tithi 0..29, nakshatra 0..26, vaar 0..6, ...).
    pub index: u8,
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Start position in the 24 h window, clamped to [0, 100].
    pub start_percent: f64,
    /// End position in the 24 h window, clamped to [0, 100].
    pub end_percent: f64,
    /// Element in effect at sunrise (first segment of the row).
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub category: TimelineCategory,
    pub segments: Vec<TimelineSegment>,
}

/// All rows of a day, positioned against one window start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineData {
    /// Instant mapped to 0 %; the window spans 24 hours from here.
    pub window_start: DateTime<Utc>,
    pub rows: Vec<TimelineRow>,
}

impl TimelineData {
    pub fn row(&self, category: TimelineCategory) -> Option<&TimelineRow> {
        self.rows.iter().find(|r| r.category == category)
    }
}

/// Sun and moon markers in the same 24 h window as the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialArcs {
    pub window_start: DateTime<Utc>,
    pub sunrise_percent: Option<f64>,
    pub sunset_percent: Option<f64>,
    pub moonrise_percent: Option<f64>,
    pub moonset_percent: Option<f64>,
}
