//! Buddhist festival detection across three calendrical traditions.
//!
//! - Theravada: sunrise tithi within a lunar month, a Vijayadashami
//!   transition rule, and fixed Gregorian memorial days
//! - Vajrayana: Gregorian dates precomputed from the Tibetan calendar
//! - Mahayana: fixed Gregorian dates and, given a [`LunarCalendar`],
//!   Chinese lunar dates
//!
//! [`FestivalMatcher`] combines the three detectors for a single date;
//! [`upcoming_festivals`] scans a window of days.

pub mod catalogue;
pub mod detector;
pub mod festival_types;
pub mod lunar;
pub mod mahayana;
pub mod matcher;
pub mod theravada;
pub mod upcoming;
pub mod vajrayana;

pub use catalogue::{all_festivals, festival_by_id};
pub use detector::FestivalDetector;
pub use festival_types::{
    ALL_TRADITIONS, BuddhistFestival, FestivalInfo, FestivalMatch, HistoricalEvent,
    MahayanaFestival, MahayanaRule, TheravadaFestival, TheravadaRule, TithiRule, Tradition,
    VajrayanaFestival,
};
pub use lunar::{LunarCalendar, LunarDate};
pub use mahayana::{MAHAYANA_FESTIVALS, MahayanaDetector};
pub use matcher::FestivalMatcher;
pub use theravada::{THERAVADA_FESTIVALS, TheravadaDetector, is_ashoka_vijayadashami};
pub use upcoming::{upcoming_festivals, upcoming_festivals_async};
pub use vajrayana::{VAJRAYANA_FESTIVALS, VajrayanaDetector, vajrayana_dates_in};
