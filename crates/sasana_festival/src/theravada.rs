//! Theravada festivals: Poya days of the sunrise-anchored lunisolar year,
//! Ashoka Vijayadashami, and fixed Gregorian memorial days.
//!
//! Rules are tried in precedence order: fixed dates, then Vijayadashami,
//! then the masa/tithi table. Tithis are 0-based, so Purnima is 14 and
//! Shukla Dashami is 9.

use chrono::{Datelike, NaiveDate};
use log::trace;
use sasana_panchang::{EphemerisError, GeoLocation, Masa, PanchangSource, Panchangam, PURNIMA};

use crate::detector::FestivalDetector;
use crate::festival_types::{
    BuddhistFestival, FestivalInfo, HistoricalEvent, TheravadaFestival, TheravadaRule, TithiRule,
    Tradition,
};

/// 0-based sunrise tithi of Shukla Dashami.
const SHUKLA_DASHAMI: u8 = 9;

const NO_EVENTS: &[HistoricalEvent] = &[];

const VESAK_EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        title: "Birth of Prince Siddhattha",
        description: "Queen Mahamaya gives birth in a sala grove on the way to her parents.",
        place: "Lumbini",
    },
    HistoricalEvent {
        title: "Enlightenment",
        description: "Under the Bodhi tree the Bodhisatta attains full awakening.",
        place: "Bodh Gaya",
    },
    HistoricalEvent {
        title: "Parinibbana",
        description: "The Buddha passes into final nibbana between twin sala trees at eighty.",
        place: "Kushinagar",
    },
];

const ASALHA_EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        title: "First Sermon",
        description: "The Dhammacakkappavattana Sutta is taught to the five ascetics.",
        place: "Isipatana (Sarnath)",
    },
    HistoricalEvent {
        title: "Great Renunciation",
        description: "Prince Siddhattha leaves the palace for the homeless life.",
        place: "Kapilavatthu",
    },
];

const MAGHA_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Fourfold Assembly",
    description: "1,250 arahants gather unannounced and the Ovada Patimokkha is recited.",
    place: "Veluvana, Rajagaha",
}];

const POSON_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Arrival of Arahant Mahinda",
    description: "Emperor Ashoka's son brings the Dhamma to King Devanampiya Tissa.",
    place: "Mihintale",
}];

const UNDUVAP_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Arrival of the Bodhi sapling",
    description: "Theri Sanghamitta brings a branch of the Bodhi tree to Sri Lanka.",
    place: "Anuradhapura",
}];

const ASHOKA_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Emperor Ashoka embraces the Dhamma",
    description: "Remorse after the Kalinga war turns Ashoka to the Buddha's teaching.",
    place: "Kalinga",
}];

const DIKSHA_EVENTS: &[HistoricalEvent] = &[HistoricalEvent {
    title: "Dhamma Diksha",
    description: "Dr. B. R. Ambedkar and several hundred thousand followers take the refuges.",
    place: "Deekshabhoomi, Nagpur",
}];

const fn info(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    region: &'static str,
    events: &'static [HistoricalEvent],
) -> FestivalInfo {
    FestivalInfo {
        id,
        name,
        description,
        region,
        events,
    }
}

const fn poya(masa: Masa, tithi: TithiRule, info: FestivalInfo) -> TheravadaFestival {
    TheravadaFestival {
        info,
        rule: TheravadaRule::Lunar { masa, tithi },
    }
}

const fn fixed(month: u32, day: u32, info: FestivalInfo) -> TheravadaFestival {
    TheravadaFestival {
        info,
        rule: TheravadaRule::Fixed { month, day },
    }
}

/// Theravada catalogue in precedence order.
pub static THERAVADA_FESTIVALS: &[TheravadaFestival] = &[
    fixed(
        4,
        14,
        info(
            "ambedkar_jayanti",
            "Ambedkar Jayanti",
            "Birth anniversary of Dr. B. R. Ambedkar, leader of the Navayana revival.",
            "India",
            NO_EVENTS,
        ),
    ),
    fixed(
        10,
        14,
        info(
            "dhammachakra_pravartan_din",
            "Dhammachakra Pravartan Din",
            "Anniversary of the 1956 mass conversion at Nagpur.",
            "India",
            DIKSHA_EVENTS,
        ),
    ),
    fixed(
        12,
        6,
        info(
            "mahaparinirvan_diwas",
            "Mahaparinirvan Diwas",
            "Remembrance of Dr. B. R. Ambedkar's death in 1956.",
            "India",
            NO_EVENTS,
        ),
    ),
    TheravadaFestival {
        info: info(
            "ashoka_vijayadashami",
            "Ashoka Vijayadashami",
            "Commemorates Emperor Ashoka's conversion to Buddhism.",
            "India",
            ASHOKA_EVENTS,
        ),
        rule: TheravadaRule::Vijayadashami,
    },
    poya(
        Masa::Chaitra,
        TithiRule::Exact(PURNIMA),
        info(
            "bak_poya",
            "Bak Poya",
            "The Buddha's second visit to Sri Lanka, settling a dispute at Nagadipa.",
            "Sri Lanka",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Vaishakha,
        TithiRule::Exact(PURNIMA),
        info(
            "vesak",
            "Vesak",
            "Birth, enlightenment, and passing of the Buddha.",
            "Sri Lanka, Myanmar, Thailand, Cambodia, Laos",
            VESAK_EVENTS,
        ),
    ),
    poya(
        Masa::Jyeshtha,
        TithiRule::Exact(PURNIMA),
        info(
            "poson",
            "Poson Poya",
            "Introduction of Buddhism to Sri Lanka.",
            "Sri Lanka",
            POSON_EVENTS,
        ),
    ),
    poya(
        Masa::Ashadha,
        TithiRule::Exact(PURNIMA),
        info(
            "asalha_puja",
            "Asalha Puja",
            "The first sermon and the founding of the Sangha.",
            "Sri Lanka, Thailand, Myanmar, Laos, Cambodia",
            ASALHA_EVENTS,
        ),
    ),
    poya(
        Masa::Ashadha,
        TithiRule::Exact(PURNIMA + 1),
        info(
            "vassa_begins",
            "Vassa Begins",
            "Monastics enter the three-month rains retreat.",
            "Sri Lanka, Thailand, Myanmar, Laos, Cambodia",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Shravana,
        TithiRule::Exact(PURNIMA),
        info(
            "nikini_poya",
            "Nikini Poya",
            "The First Council convened after the Buddha's parinibbana.",
            "Sri Lanka",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Bhadrapada,
        TithiRule::Exact(PURNIMA),
        info(
            "binara_poya",
            "Binara Poya",
            "The Buddha's visit to Tavatimsa and the founding of the bhikkhuni order.",
            "Sri Lanka",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Ashvina,
        TithiRule::Exact(PURNIMA),
        info(
            "pavarana",
            "Pavarana",
            "End of the rains retreat; monastics invite admonition from one another.",
            "Sri Lanka, Thailand, Myanmar, Laos, Cambodia",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Ashvina,
        TithiRule::Range(PURNIMA + 1, 29),
        info(
            "kathina",
            "Kathina Season",
            "Month of robe offerings to monasteries that kept the rains retreat.",
            "Sri Lanka, Thailand, Myanmar, Laos, Cambodia",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Kartika,
        TithiRule::Exact(PURNIMA),
        info(
            "il_poya",
            "Il Poya",
            "Sixty arahants are sent forth to spread the Dhamma.",
            "Sri Lanka, Thailand",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Margashirsha,
        TithiRule::Exact(PURNIMA),
        info(
            "unduvap_poya",
            "Unduvap Poya",
            "Arrival of the sacred Bodhi sapling and of Theri Sanghamitta.",
            "Sri Lanka",
            UNDUVAP_EVENTS,
        ),
    ),
    poya(
        Masa::Pausha,
        TithiRule::Exact(PURNIMA),
        info(
            "duruthu_poya",
            "Duruthu Poya",
            "The Buddha's first visit to Sri Lanka.",
            "Sri Lanka",
            NO_EVENTS,
        ),
    ),
    poya(
        Masa::Magha,
        TithiRule::Exact(PURNIMA),
        info(
            "magha_puja",
            "Magha Puja",
            "The spontaneous assembly of 1,250 arahants.",
            "Thailand, Laos, Cambodia, Sri Lanka",
            MAGHA_EVENTS,
        ),
    ),
    poya(
        Masa::Phalguna,
        TithiRule::Exact(PURNIMA),
        info(
            "medin_poya",
            "Medin Poya",
            "The Buddha's first visit home to Kapilavatthu after the enlightenment.",
            "Sri Lanka",
            NO_EVENTS,
        ),
    ),
];

fn fixed_match(date: NaiveDate) -> Option<&'static TheravadaFestival> {
    THERAVADA_FESTIVALS.iter().find(|f| {
        matches!(f.rule, TheravadaRule::Fixed { month, day }
            if month == date.month() && day == date.day())
    })
}

fn lunar_match(today: &Panchangam) -> Option<&'static TheravadaFestival> {
    if today.masa.is_adhika {
        return None;
    }
    THERAVADA_FESTIVALS.iter().find(|f| {
        matches!(f.rule, TheravadaRule::Lunar { masa, tithi }
            if masa == today.masa.masa && tithi.matches(today.tithi))
    })
}

fn vijayadashami_festival() -> Option<&'static TheravadaFestival> {
    THERAVADA_FESTIVALS
        .iter()
        .find(|f| f.rule == TheravadaRule::Vijayadashami)
}

/// Whether `date` is the transition day into Shukla Dashami of a regular
/// Ashvina, or the provider flags it as Vijayadashami.
///
/// Both conditions are checked independently, so a provider whose flag
/// lands one day off yields two consecutive matching days.
pub fn is_ashoka_vijayadashami(
    source: &dyn PanchangSource,
    date: NaiveDate,
    location: &GeoLocation,
    today: &Panchangam,
) -> Result<bool, EphemerisError> {
    if today.is_vijayadashami {
        return Ok(true);
    }
    // Dashami can only be tomorrow's sunrise tithi from Ashtami or Navami
    // of the same regular Ashvina.
    let in_ashvina = today.masa.masa == Masa::Ashvina && !today.masa.is_adhika;
    if !in_ashvina || !matches!(today.tithi, 7 | 8) {
        return Ok(false);
    }
    let Some(next) = date.succ_opt() else {
        return Ok(false);
    };
    let tomorrow = source.panchangam(next, location)?;
    Ok(tomorrow.tithi == SHUKLA_DASHAMI
        && tomorrow.masa.masa == Masa::Ashvina
        && !tomorrow.masa.is_adhika)
}

/// Detector for [`THERAVADA_FESTIVALS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TheravadaDetector;

impl FestivalDetector for TheravadaDetector {
    fn tradition(&self) -> Tradition {
        Tradition::Theravada
    }

    fn detect(
        &self,
        source: &dyn PanchangSource,
        date: NaiveDate,
        location: &GeoLocation,
        snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError> {
        if let Some(f) = fixed_match(date) {
            return Ok(Some(BuddhistFestival::Theravada(f)));
        }
        let fetched;
        let today = match snapshot {
            Some(p) => p,
            None => {
                fetched = source.panchangam(date, location)?;
                &*fetched
            }
        };
        if let Some(f) = vijayadashami_festival() {
            if is_ashoka_vijayadashami(source, date, location, today)? {
                return Ok(Some(BuddhistFestival::Theravada(f)));
            }
        }
        let found = lunar_match(today);
        trace!(
            "{date}: theravada {} tithi {} -> {:?}",
            today.masa.masa.name(),
            today.tithi,
            found.map(|f| f.info.id)
        );
        Ok(found.map(BuddhistFestival::Theravada))
    }
}
