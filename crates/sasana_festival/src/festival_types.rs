//! Festival catalogue types shared by the three tradition detectors.

use chrono::NaiveDate;
use sasana_panchang::Masa;
use serde::Serialize;

/// Buddhist tradition a festival belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tradition {
    Theravada,
    Vajrayana,
    Mahayana,
}

/// Detector order used by the matcher.
pub const ALL_TRADITIONS: [Tradition; 3] = [
    Tradition::Theravada,
    Tradition::Vajrayana,
    Tradition::Mahayana,
];

impl Tradition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Theravada => "Theravada",
            Self::Vajrayana => "Vajrayana",
            Self::Mahayana => "Mahayana",
        }
    }
}

/// An event from the life of the Buddha or the early sangha commemorated
/// by a festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalEvent {
    pub title: &'static str,
    pub description: &'static str,
    pub place: &'static str,
}

/// Display metadata common to every festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FestivalInfo {
    /// Stable identifier, unique across all traditions.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Where the festival is chiefly observed.
    pub region: &'static str,
    pub events: &'static [HistoricalEvent],
}

/// Sunrise tithi criterion of a lunar festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TithiRule {
    /// One 0-based tithi.
    Exact(u8),
    /// Inclusive 0-based tithi range.
    Range(u8, u8),
}

impl TithiRule {
    pub const fn matches(self, tithi: u8) -> bool {
        match self {
            Self::Exact(t) => tithi == t,
            Self::Range(lo, hi) => lo <= tithi && tithi <= hi,
        }
    }
}

/// How a Theravada festival is located in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TheravadaRule {
    /// Same Gregorian month and day every year.
    Fixed { month: u32, day: u32 },
    /// The day before Shukla Dashami of Ashvina first touches a sunrise.
    Vijayadashami,
    /// Sunrise tithi within a regular (non-adhika) masa.
    Lunar { masa: Masa, tithi: TithiRule },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TheravadaFestival {
    pub info: FestivalInfo,
    pub rule: TheravadaRule,
}

/// How a Mahayana festival is located in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MahayanaRule {
    /// Same Gregorian month and day every year.
    Fixed { month: u32, day: u32 },
    /// Chinese lunar month (1..=12) and day (1..=30).
    ChineseLunar { month: u32, day: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MahayanaFestival {
    pub info: FestivalInfo,
    pub rule: MahayanaRule,
}

/// A Vajrayana festival with Gregorian dates precomputed from the
/// Tibetan calendar, one `(month, day)` per year from `first_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VajrayanaFestival {
    pub info: FestivalInfo,
    pub first_year: i32,
    pub dates: &'static [(u32, u32)],
}

impl VajrayanaFestival {
    /// Gregorian date in `year`, or None outside the table.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        let offset = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        let &(month, day) = self.dates.get(offset)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Last year covered by the table.
    pub fn last_year(&self) -> i32 {
        self.first_year + self.dates.len() as i32 - 1
    }
}

/// A detected festival, pointing into the static catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuddhistFestival {
    Theravada(&'static TheravadaFestival),
    Mahayana(&'static MahayanaFestival),
    Vajrayana(&'static VajrayanaFestival),
}

impl BuddhistFestival {
    pub fn info(&self) -> &'static FestivalInfo {
        match *self {
            Self::Theravada(f) => &f.info,
            Self::Mahayana(f) => &f.info,
            Self::Vajrayana(f) => &f.info,
        }
    }

    pub fn id(&self) -> &'static str {
        self.info().id
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn events(&self) -> &'static [HistoricalEvent] {
        self.info().events
    }

    pub fn tradition(&self) -> Tradition {
        match self {
            Self::Theravada(_) => Tradition::Theravada,
            Self::Mahayana(_) => Tradition::Mahayana,
            Self::Vajrayana(_) => Tradition::Vajrayana,
        }
    }
}

/// A festival resolved to a date within a scan window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FestivalMatch {
    pub festival: BuddhistFestival,
    pub date: NaiveDate,
    /// Whole days from the scan start (0 on the start date).
    pub days_remaining: i64,
}
