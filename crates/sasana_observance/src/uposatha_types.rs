//! Types for Uposatha classification results.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sasana_panchang::{AMAVASYA, PURNIMA, Paksha, Panchangam};
use serde::Serialize;

/// The four lunar days on which Uposatha is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UposathaKind {
    /// Purnima, tithi 14.
    FullMoon,
    /// Amavasya, tithi 29.
    NewMoon,
    /// Ashtami, tithi 7 or 22.
    Ashtami,
    /// Chaturdashi, tithi 13 or 28.
    Chaturdashi,
}

impl UposathaKind {
    /// Kind of a 0-based tithi, or None for an ordinary lunar day.
    pub const fn from_tithi(tithi: u8) -> Option<Self> {
        match tithi {
            PURNIMA => Some(Self::FullMoon),
            AMAVASYA => Some(Self::NewMoon),
            7 | 22 => Some(Self::Ashtami),
            13 | 28 => Some(Self::Chaturdashi),
            _ => None,
        }
    }

    /// Syzygies outrank Chaturdashi, which outranks Ashtami.
    const fn rank(self) -> u8 {
        match self {
            Self::FullMoon | Self::NewMoon => 2,
            Self::Chaturdashi => 1,
            Self::Ashtami => 0,
        }
    }

    /// The more significant of two kinds; `self` on a tie.
    pub const fn more_significant(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }
}

/// Which classification branch produced a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObservanceBranch {
    /// The sunrise tithi itself is significant.
    Primary,
    /// A significant tithi begins and ends between two sunrises.
    Kshaya,
    /// The significant sunrise tithi already held at yesterday's sunrise.
    Vridhi,
    /// Nothing to observe.
    Ordinary,
}

/// Uposatha classification of one day for one observer.
#[derive(Debug, Clone, Serialize)]
pub struct UposathaStatus {
    /// Primary observance day.
    pub is_uposatha: bool,
    pub is_full_moon: bool,
    pub is_new_moon: bool,
    pub is_ashtami: bool,
    pub is_chaturdashi: bool,
    /// Secondary observance (kshaya or vridhi); never set with `is_uposatha`.
    pub is_optional: bool,
    /// A significant tithi is skipped between today's and tomorrow's sunrise.
    pub is_kshaya: bool,
    /// Today's significant tithi is the second sunrise of the same tithi.
    pub is_vridhi: bool,
    /// 1-based sunrise tithi (1..=30).
    pub tithi_number: u8,
    /// Display name of the sunrise tithi.
    pub tithi_name: &'static str,
    pub paksha: Paksha,
    /// English label for the branch that fired.
    pub label: &'static str,
    /// Pali label for the branch that fired; empty on ordinary days.
    pub pali_label: &'static str,
    /// Kind of the observed tithi (the skipped one for kshaya days).
    pub kind: Option<UposathaKind>,
    pub branch: ObservanceBranch,
    /// Snapshot the status was derived from.
    pub panchangam: Arc<Panchangam>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

impl UposathaStatus {
    /// Primary or optional observance.
    pub fn is_observance(&self) -> bool {
        self.is_uposatha || self.is_optional
    }
}
