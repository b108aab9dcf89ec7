//! Planetary hours: 12 unequal day horas and 12 unequal night horas.
//!
//! Sunrise to sunset is split into 12 equal parts, sunset to the next
//! sunrise into another 12. Day and night parts differ in length with
//! season and latitude. Rulers walk the Chaldean order one step per hora
//! across all 24 segments, starting from the weekday lord.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sasana_panchang::{EphemerisError, GeoLocation, PanchangSource, Planet, Vaar};

use crate::hora_types::{DAY_HORA_COUNT, HORA_COUNT, HoraSegment};

/// Chaldean order, slowest to fastest apparent motion.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

/// Chaldean index of each weekday's lord, Sunday first.
const WEEKDAY_LORD_INDEX: [u8; 7] = [3, 6, 2, 5, 1, 4, 0];

/// Chaldean index of the lord of the first hora of a weekday.
pub const fn day_lord_index(vaar: Vaar) -> u8 {
    WEEKDAY_LORD_INDEX[vaar.index() as usize]
}

/// Lord of the `hora_index`-th (0-based) hora on a weekday.
pub const fn hora_lord(vaar: Vaar, hora_index: u8) -> Planet {
    CHALDEAN_ORDER[(day_lord_index(vaar) as usize + hora_index as usize) % 7]
}

/// `parts` equal intervals of `[from, to)`, with the last ending exactly at `to`.
fn split(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    parts: u8,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let total_ms = (to - from).num_milliseconds();
    let boundary = |i: i64| from + Duration::milliseconds(total_ms * i / parts as i64);
    (0..parts as i64)
        .map(|i| (boundary(i), boundary(i + 1)))
        .collect()
}

/// Build the 24 horas from pre-computed boundaries.
///
/// Pure arithmetic. Returns an empty vector when the boundaries are not
/// strictly increasing.
pub fn horas_from_boundaries(
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
    vaar: Vaar,
    now: DateTime<Utc>,
) -> Vec<HoraSegment> {
    if !(sunrise < sunset && sunset < next_sunrise) {
        return Vec::new();
    }
    let first = day_lord_index(vaar);
    split(sunrise, sunset, DAY_HORA_COUNT)
        .into_iter()
        .chain(split(sunset, next_sunrise, HORA_COUNT - DAY_HORA_COUNT))
        .enumerate()
        .map(|(i, (start, end))| {
            let ruler_index = (first + i as u8) % 7;
            HoraSegment {
                hora_number: i as u8 + 1,
                planet: CHALDEAN_ORDER[ruler_index as usize],
                start,
                end,
                is_day_hora: (i as u8) < DAY_HORA_COUNT,
                is_current: start <= now && now < end,
                ruler_index,
            }
        })
        .collect()
}

/// Compute the 24 horas of `date` for an observer.
///
/// Returns an empty vector when sunrise, sunset, or the next day's
/// sunrise is unavailable (polar day or night). Provider failures are
/// errors.
pub fn compute_horas(
    source: &dyn PanchangSource,
    date: NaiveDate,
    location: &GeoLocation,
    now: DateTime<Utc>,
) -> Result<Vec<HoraSegment>, EphemerisError> {
    let today = source.panchangam(date, location)?;
    let (Some(sunrise), Some(sunset)) = (today.sunrise, today.sunset) else {
        return Ok(Vec::new());
    };
    let next_date = date.succ_opt().ok_or(EphemerisError::Unavailable { date })?;
    let Some(next_sunrise) = source.panchangam(next_date, location)?.sunrise else {
        return Ok(Vec::new());
    };
    Ok(horas_from_boundaries(sunrise, sunset, next_sunrise, today.vaar, now))
}

/// The hora flagged current, if any.
pub fn current_hora(horas: &[HoraSegment]) -> Option<&HoraSegment> {
    horas.iter().find(|h| h.is_current)
}
