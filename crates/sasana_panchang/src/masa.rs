//! Masa (lunar month) enumeration.
//!
//! Index 0 is Chaitra, following the Amanta convention used by the
//! ephemeris provider. An adhika (intercalary) month repeats the name of
//! the regular month that follows it.

use serde::Serialize;

/// The 12 lunar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (index 0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Sanskrit name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Masa for a 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_MASAS.get(index as usize).copied()
    }
}

/// Masa as reported for one day: the month plus its intercalary flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MasaInfo {
    /// The masa (lunar month).
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub is_adhika: bool,
}

impl MasaInfo {
    pub const fn new(masa: Masa, is_adhika: bool) -> Self {
        Self { masa, is_adhika }
    }

    /// Regular (non-adhika) month.
    pub const fn regular(masa: Masa) -> Self {
        Self::new(masa, false)
    }
}
