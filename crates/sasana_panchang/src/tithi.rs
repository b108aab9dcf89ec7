//! Tithi (lunar day) vocabulary: paksha and display names.
//!
//! A synodic month holds 30 tithis of 12 degrees of Moon-Sun elongation
//! each. Index 0..=14 is the waxing fortnight ending in Purnima (14),
//! 15..=29 the waning fortnight ending in Amavasya (29).

use serde::Serialize;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// 0-based tithi index of Purnima (full moon).
pub const PURNIMA: u8 = 14;

/// 0-based tithi index of Amavasya (new moon).
pub const AMAVASYA: u8 = 29;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing fortnight (tithi 0..=14).
    Shukla,
    /// Waning fortnight (tithi 15..=29).
    Krishna,
}

impl Paksha {
    /// Paksha containing a 0-based tithi index.
    pub const fn from_tithi(tithi: u8) -> Self {
        if tithi < 15 { Self::Shukla } else { Self::Krishna }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

const TITHI_NAMES_IN_PAKSHA: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Display name for a 0-based tithi index.
///
/// Indices 14 and 29 are Purnima and Amavasya; the rest repeat the
/// fourteen paksha names. Out-of-range indices wrap modulo 30.
pub fn tithi_name(tithi: u8) -> &'static str {
    let t = tithi % TITHI_COUNT;
    match t {
        PURNIMA => "Purnima",
        AMAVASYA => "Amavasya",
        _ => TITHI_NAMES_IN_PAKSHA[(t % 15) as usize],
    }
}

/// 1-based tithi number within its paksha (1..=15).
pub const fn tithi_in_paksha(tithi: u8) -> u8 {
    (tithi % TITHI_COUNT) % 15 + 1
}
