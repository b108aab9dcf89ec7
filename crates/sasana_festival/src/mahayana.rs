//! Mahayana festivals on fixed Gregorian dates or Chinese lunar dates.
//!
//! Lunar festivals need a [`LunarCalendar`]. Without one the detector
//! only reports the fixed Gregorian observances.

use chrono::{Datelike, NaiveDate};
use log::debug;
use sasana_panchang::{EphemerisError, GeoLocation, PanchangSource, Panchangam};

use crate::detector::FestivalDetector;
use crate::festival_types::{
    BuddhistFestival, FestivalInfo, HistoricalEvent, MahayanaFestival, MahayanaRule, Tradition,
};
use crate::lunar::{LunarCalendar, LunarDate};

const NO_EVENTS: &[HistoricalEvent] = &[];

const BIRTHDAY_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Birth of the Buddha",
    description: "The newborn prince takes seven steps and lotuses spring up beneath his feet.",
    place: "Lumbini",
}];

const BODHI_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Enlightenment",
    description: "Seeing the morning star, Shakyamuni awakens under the Bodhi tree.",
    place: "Bodh Gaya",
}];

const ULLAMBANA_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Maudgalyayana rescues his mother",
    description: "Offerings to the sangha at the end of the retreat free her from suffering.",
    place: "Rajagriha",
}];

const fn fixed(month: u32, day: u32, info: FestivalInfo) -> MahayanaFestival {
    MahayanaFestival {
        info,
        rule: MahayanaRule::Fixed { month, day },
    }
}

const fn lunar(month: u32, day: u32, info: FestivalInfo) -> MahayanaFestival {
    MahayanaFestival {
        info,
        rule: MahayanaRule::ChineseLunar { month, day },
    }
}

const EAST_ASIA: &str = "China, Taiwan, Korea, Vietnam";

/// Mahayana catalogue; fixed dates first.
pub static MAHAYANA_FESTIVALS: &[MahayanaFestival] = &[
    fixed(
        2,
        15,
        FestivalInfo {
            id: "nirvana_day",
            name: "Nirvana Day",
            description: "Remembrance of the Buddha's parinirvana.",
            region: "Japan",
            events: NO_EVENTS,
        },
    ),
    fixed(
        4,
        8,
        FestivalInfo {
            id: "hanamatsuri",
            name: "Hanamatsuri",
            description: "Flower festival for the Buddha's birth; statues are bathed in sweet tea.",
            region: "Japan",
            events: BIRTHDAY_EVENTS,
        },
    ),
    fixed(
        12,
        8,
        FestivalInfo {
            id: "bodhi_day",
            name: "Bodhi Day",
            description: "Rohatsu, the day of the Buddha's enlightenment.",
            region: "Japan",
            events: BODHI_EVENTS,
        },
    ),
    lunar(
        1,
        1,
        FestivalInfo {
            id: "maitreya_birthday",
            name: "Maitreya Bodhisattva's Birthday",
            description: "Lunar New Year's day honours the coming Buddha.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        2,
        19,
        FestivalInfo {
            id: "guanyin_birthday",
            name: "Guanyin's Birthday",
            description: "Birth of Avalokiteshvara, bodhisattva of compassion.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        2,
        21,
        FestivalInfo {
            id: "samantabhadra_birthday",
            name: "Samantabhadra's Birthday",
            description: "Birth of the bodhisattva of practice and vows.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        4,
        4,
        FestivalInfo {
            id: "manjushri_birthday",
            name: "Manjushri's Birthday",
            description: "Birth of the bodhisattva of wisdom.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        4,
        8,
        FestivalInfo {
            id: "buddha_birthday",
            name: "Buddha's Birthday",
            description: "Bathing the Buddha on the eighth day of the fourth lunar month.",
            region: EAST_ASIA,
            events: BIRTHDAY_EVENTS,
        },
    ),
    lunar(
        6,
        19,
        FestivalInfo {
            id: "guanyin_enlightenment",
            name: "Guanyin's Enlightenment",
            description: "Avalokiteshvara attains enlightenment.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        7,
        15,
        FestivalInfo {
            id: "ullambana",
            name: "Ullambana",
            description: "Offerings for ancestors at the close of the summer retreat.",
            region: EAST_ASIA,
            events: ULLAMBANA_EVENTS,
        },
    ),
    lunar(
        9,
        19,
        FestivalInfo {
            id: "guanyin_renunciation",
            name: "Guanyin's Renunciation",
            description: "Avalokiteshvara leaves the household life.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        11,
        17,
        FestivalInfo {
            id: "amitabha_birthday",
            name: "Amitabha's Birthday",
            description: "Birth of the Buddha of the Western Pure Land.",
            region: EAST_ASIA,
            events: NO_EVENTS,
        },
    ),
    lunar(
        12,
        8,
        FestivalInfo {
            id: "laba",
            name: "Laba Festival",
            description: "Enlightenment day, marked with Laba congee.",
            region: EAST_ASIA,
            events: BODHI_EVENTS,
        },
    ),
];

/// Detector for [`MAHAYANA_FESTIVALS`], with an optional lunar calendar.
#[derive(Clone, Copy)]
pub struct MahayanaDetector<'a> {
    lunar: Option<&'a dyn LunarCalendar>,
}

impl<'a> MahayanaDetector<'a> {
    pub fn new(lunar: Option<&'a dyn LunarCalendar>) -> Self {
        if lunar.is_none() {
            debug!("no lunar calendar, Mahayana matching limited to fixed dates");
        }
        Self { lunar }
    }

    /// Whether lunar festivals can be matched.
    pub fn has_lunar_calendar(&self) -> bool {
        self.lunar.is_some()
    }

    pub fn festival_on(&self, date: NaiveDate) -> Option<&'static MahayanaFestival> {
        let lunar = self
            .lunar
            .and_then(|cal| cal.lunar_date(date.year(), date.month(), date.day()));
        MAHAYANA_FESTIVALS.iter().find(|f| match f.rule {
            MahayanaRule::Fixed { month, day } => month == date.month() && day == date.day(),
            MahayanaRule::ChineseLunar { month, day } => lunar == Some(LunarDate { month, day }),
        })
    }
}

impl std::fmt::Debug for MahayanaDetector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MahayanaDetector")
            .field("has_lunar_calendar", &self.has_lunar_calendar())
            .finish()
    }
}

impl FestivalDetector for MahayanaDetector<'_> {
    fn tradition(&self) -> Tradition {
        Tradition::Mahayana
    }

    fn detect(
        &self,
        _source: &dyn PanchangSource,
        date: NaiveDate,
        _location: &GeoLocation,
        _snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError> {
        Ok(self.festival_on(date).map(BuddhistFestival::Mahayana))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Treats the Gregorian month and day as the lunar date.
    fn identity(_: i32, month: u32, day: u32) -> Option<LunarDate> {
        Some(LunarDate::new(month, day))
    }

    #[test]
    fn fixed_dates_without_calendar() {
        let d = MahayanaDetector::new(None);
        assert_eq!(d.festival_on(ymd(2026, 12, 8)).unwrap().info.id, "bodhi_day");
        assert!(d.festival_on(ymd(2026, 7, 15)).is_none());
    }

    #[test]
    fn lunar_dates_with_calendar() {
        let cal = identity;
        let d = MahayanaDetector::new(Some(&cal));
        assert_eq!(d.festival_on(ymd(2026, 7, 15)).unwrap().info.id, "ullambana");
        assert_eq!(d.festival_on(ymd(2026, 2, 19)).unwrap().info.id, "guanyin_birthday");
    }

    #[test]
    fn fixed_date_wins_over_lunar() {
        let cal = identity;
        let d = MahayanaDetector::new(Some(&cal));
        // 4/8 is both Hanamatsuri and, under the identity calendar, Buddha's Birthday.
        assert_eq!(d.festival_on(ymd(2026, 4, 8)).unwrap().info.id, "hanamatsuri");
    }

    #[test]
    fn calendar_out_of_range_falls_back_to_fixed() {
        let cal = |_: i32, _: u32, _: u32| -> Option<LunarDate> { None };
        let d = MahayanaDetector::new(Some(&cal));
        assert!(d.festival_on(ymd(2026, 7, 15)).is_none());
        assert!(d.festival_on(ymd(2026, 2, 15)).is_some());
    }
}
