//! The 7 classical planets used for hora rulership and positions.

use serde::Serialize;

/// The 7 classical planets (sapta grahas), excluding the lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All 7 planets in weekday-lord order (Sun=Sunday .. Saturn=Saturday).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

impl Planet {
    /// Sanskrit name of the planet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
        }
    }

    /// English name of the planet.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// Astrological glyph, used by hora and chart views.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mars => "♂",
            Self::Mercury => "☿",
            Self::Jupiter => "♃",
            Self::Venus => "♀",
            Self::Saturn => "♄",
        }
    }
}
