//! Vajrayana festivals from precomputed Tibetan calendar tables.
//!
//! Tibetan lunar dates are converted to Gregorian offline; each festival
//! holds one date per year starting at `first_year`. Years outside the
//! table never match.

use chrono::{Datelike, NaiveDate};
use sasana_panchang::{EphemerisError, GeoLocation, PanchangSource, Panchangam};

use crate::detector::FestivalDetector;
use crate::festival_types::{
    BuddhistFestival, FestivalInfo, HistoricalEvent, Tradition, VajrayanaFestival,
};

const NO_EVENTS: &[HistoricalEvent] = &[];

const CHOTRUL_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Miracles at Shravasti",
    description: "Over fifteen days the Buddha displays miracles to defeat six rival teachers.",
    place: "Shravasti",
}];

const SAGA_DAWA_EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        title: "Enlightenment",
        description: "The Buddha attains awakening under the Bodhi tree.",
        place: "Bodh Gaya",
    },
    HistoricalEvent {
        title: "Parinirvana",
        description: "The Buddha passes into final nirvana.",
        place: "Kushinagar",
    },
];

const CHOKHOR_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "First Turning of the Wheel",
    description: "Seven weeks after awakening the Buddha teaches the Four Noble Truths.",
    place: "Sarnath",
}];

const LHABAB_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Descent from Tushita",
    description: "After teaching his mother in the heavens the Buddha returns to earth.",
    place: "Sankasya",
}];

const GANDEN_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Parinirvana of Je Tsongkhapa",
    description: "Death of the founder of the Gelug school in 1419.",
    place: "Ganden Monastery",
}];

/// First year of every table below.
const FIRST_YEAR: i32 = 2024;

/// Vajrayana catalogue; dates cover 2024 through 2028.
pub static VAJRAYANA_FESTIVALS: &[VajrayanaFestival] = &[
    VajrayanaFestival {
        info: FestivalInfo {
            id: "losar",
            name: "Losar",
            description: "Tibetan New Year, first day of the first Tibetan month.",
            region: "Tibet, Bhutan, Nepal, Ladakh",
            events: NO_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(2, 10), (2, 28), (2, 18), (2, 7), (2, 26)],
    },
    VajrayanaFestival {
        info: FestivalInfo {
            id: "chotrul_duchen",
            name: "Chotrul Duchen",
            description: "Day of Miracles, the full moon closing the Losar fortnight.",
            region: "Tibet, Bhutan, Nepal, Ladakh",
            events: CHOTRUL_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(2, 24), (3, 14), (3, 4), (2, 21), (3, 11)],
    },
    VajrayanaFestival {
        info: FestivalInfo {
            id: "saga_dawa_duchen",
            name: "Saga Dawa Duchen",
            description: "Full moon of the fourth Tibetan month.",
            region: "Tibet, Bhutan, Nepal, Ladakh",
            events: SAGA_DAWA_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(5, 23), (6, 11), (5, 31), (5, 20), (6, 7)],
    },
    VajrayanaFestival {
        info: FestivalInfo {
            id: "chokhor_duchen",
            name: "Chokhor Duchen",
            description: "Fourth day of the sixth Tibetan month.",
            region: "Tibet, Bhutan, Nepal, Ladakh",
            events: CHOKHOR_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(8, 8), (7, 28), (7, 18), (8, 6), (7, 26)],
    },
    VajrayanaFestival {
        info: FestivalInfo {
            id: "lhabab_duchen",
            name: "Lhabab Duchen",
            description: "Twenty-second day of the ninth Tibetan month.",
            region: "Tibet, Bhutan, Nepal, Ladakh",
            events: LHABAB_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(11, 22), (11, 11), (11, 1), (11, 19), (11, 7)],
    },
    VajrayanaFestival {
        info: FestivalInfo {
            id: "ganden_ngamchoe",
            name: "Ganden Ngamchoe",
            description: "Festival of lamps, twenty-fifth day of the tenth Tibetan month.",
            region: "Tibet, Mongolia, Ladakh",
            events: GANDEN_EVENTS,
        },
        first_year: FIRST_YEAR,
        dates: &[(12, 25), (12, 14), (12, 4), (12, 23), (12, 11)],
    },
];

/// Every Vajrayana festival falling in `year`, in catalogue order.
pub fn vajrayana_dates_in(
    year: i32,
) -> impl Iterator<Item = (&'static VajrayanaFestival, NaiveDate)> {
    VAJRAYANA_FESTIVALS
        .iter()
        .filter_map(move |f| f.date_in(year).map(|d| (f, d)))
}

/// Detector for [`VAJRAYANA_FESTIVALS`]; never touches the ephemeris.
#[derive(Debug, Clone, Copy, Default)]
pub struct VajrayanaDetector;

impl VajrayanaDetector {
    pub fn festival_on(&self, date: NaiveDate) -> Option<&'static VajrayanaFestival> {
        VAJRAYANA_FESTIVALS
            .iter()
            .find(|f| f.date_in(date.year()) == Some(date))
    }
}

impl FestivalDetector for VajrayanaDetector {
    fn tradition(&self) -> Tradition {
        Tradition::Vajrayana
    }

    fn detect(
        &self,
        _source: &dyn PanchangSource,
        date: NaiveDate,
        _location: &GeoLocation,
        _snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError> {
        Ok(self.festival_on(date).map(BuddhistFestival::Vajrayana))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_table_has_a_valid_date_per_year() {
        for f in VAJRAYANA_FESTIVALS {
            assert_eq!(f.last_year(), 2028, "{}", f.info.id);
            for year in f.first_year..=f.last_year() {
                assert!(f.date_in(year).is_some(), "{} {year}", f.info.id);
            }
        }
    }

    #[test]
    fn losar_2026() {
        let f = VajrayanaDetector.festival_on(ymd(2026, 2, 18)).unwrap();
        assert_eq!(f.info.name, "Losar");
    }

    #[test]
    fn outside_table_never_matches() {
        assert!(VajrayanaDetector.festival_on(ymd(2023, 2, 21)).is_none());
        assert!(VajrayanaDetector.festival_on(ymd(2029, 2, 14)).is_none());
        assert_eq!(vajrayana_dates_in(2030).count(), 0);
    }

    #[test]
    fn year_listing_is_in_catalogue_order() {
        let ids: Vec<_> = vajrayana_dates_in(2026).map(|(f, _)| f.info.id).collect();
        assert_eq!(
            ids,
            [
                "losar",
                "chotrul_duchen",
                "saga_dawa_duchen",
                "chokhor_duchen",
                "lhabab_duchen",
                "ganden_ngamchoe"
            ]
        );
    }
}
