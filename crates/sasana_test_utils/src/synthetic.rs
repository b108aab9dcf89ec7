//! Mean-motion ephemeris and calendar fixtures.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use sasana_panchang::{
    EphemerisError, EphemerisProvider, GeoLocation, Masa, Panchangam, Planet, PlanetPosition,
    PrecomputedEphemeris, Transition, Vaar, tithi_name,
};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Mean sidereal month in days (Moon's nakshatra cycle).
const SIDEREAL_MONTH_DAYS: f64 = 27.321_661;

/// Mean sidereal year in days.
const SIDEREAL_YEAR_DAYS: f64 = 365.256_363;

/// Observers above this latitude get no sunrise or sunset.
const POLAR_LATITUDE_DEG: f64 = 66.56;

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

fn karana_name(index: u8) -> &'static str {
    match index {
        0 => "Kimstughna",
        57 => "Shakuni",
        58 => "Chatushpada",
        59 => "Naga",
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    }
}

/// Civil date shorthand; panics on an invalid date (test-only crate).
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn colombo() -> GeoLocation {
    GeoLocation::new(6.9271, 79.8612, 0.0)
}

pub fn kathmandu() -> GeoLocation {
    GeoLocation::new(27.7172, 85.3240, 1400.0)
}

/// Above the Arctic circle: the mean model reports no sunrise.
pub fn tromso() -> GeoLocation {
    GeoLocation::new(69.6492, 18.9553, 0.0)
}

fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (b - a).num_milliseconds() as f64 / 86_400_000.0
}

fn add_days(t: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    t + Duration::milliseconds((days * 86_400_000.0).round() as i64)
}

/// Local mean time on `date` at `hours` past midnight, expressed in UTC.
fn local_mean_time(date: NaiveDate, hours: f64, longitude_deg: f64) -> DateTime<Utc> {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    add_days(midnight, (hours - longitude_deg / 15.0) / 24.0)
}

/// Sunrise and sunset from a simple seasonal day-length model.
fn rise_set(date: NaiveDate, location: &GeoLocation) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if location.latitude_deg.abs() >= POLAR_LATITUDE_DEG {
        return None;
    }
    let season =
        (2.0 * std::f64::consts::PI * (date.ordinal() as f64 - 80.0) / 365.25).sin();
    let half_day_hours = 6.0 + 2.5 * (location.latitude_deg / 66.56) * season;
    Some((
        local_mean_time(date, 12.0 - half_day_hours, location.longitude_deg),
        local_mean_time(date, 12.0 + half_day_hours, location.longitude_deg),
    ))
}

/// Mean-motion ephemeris: every angle advances linearly in time.
#[derive(Debug, Clone)]
pub struct SyntheticEphemeris {
    reference_new_moon: DateTime<Utc>,
    /// Masa index of the lunation starting at `reference_new_moon`.
    reference_masa: u8,
    /// Lunation numbers (relative to the reference) flagged adhika.
    adhika_lunations: Vec<i64>,
    vijayadashami_flag: bool,
}

impl Default for SyntheticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticEphemeris {
    /// Anchored on the new moon of 2026-04-17, which opens Vaishakha.
    pub fn new() -> Self {
        Self {
            reference_new_moon: Utc.with_ymd_and_hms(2026, 4, 17, 0, 0, 0).unwrap(),
            reference_masa: Masa::Vaishakha.index(),
            adhika_lunations: Vec::new(),
            vijayadashami_flag: true,
        }
    }

    /// Mark a lunation (0 = the one starting on the reference new moon)
    /// as adhika; following lunations are not renumbered.
    pub fn with_adhika_lunation(mut self, lunation: i64) -> Self {
        self.adhika_lunations.push(lunation);
        self
    }

    /// Whether snapshots carry the provider's own Vijayadashami flag.
    pub fn with_vijayadashami_flag(mut self, enabled: bool) -> Self {
        self.vijayadashami_flag = enabled;
        self
    }

    fn lunations_since_reference(&self, t: DateTime<Utc>) -> f64 {
        days_between(self.reference_new_moon, t) / SYNODIC_MONTH_DAYS
    }

    /// 0-based tithi in effect at instant `t`.
    pub fn tithi_at(&self, t: DateTime<Utc>) -> u8 {
        let phase = self.lunations_since_reference(t).rem_euclid(1.0);
        ((phase * 30.0).floor() as u8).min(29)
    }

    fn masa_at(&self, t: DateTime<Utc>) -> (u8, bool) {
        let lunation = self.lunations_since_reference(t).floor() as i64;
        let masa = (self.reference_masa as i64 + lunation).rem_euclid(12) as u8;
        (masa, self.adhika_lunations.contains(&lunation))
    }

    /// Segments of a linearly advancing angle that overlap [from, to).
    fn segments(
        &self,
        epoch: DateTime<Utc>,
        period_days: f64,
        count: u32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        name: impl Fn(u8) -> String,
    ) -> Vec<Transition> {
        let seg_days = period_days / count as f64;
        let elapsed = days_between(epoch, from);
        let mut n = (elapsed / seg_days).floor() as i64;
        let mut out = Vec::new();
        loop {
            let start = add_days(epoch, n as f64 * seg_days);
            if start >= to {
                break;
            }
            let end = add_days(epoch, (n + 1) as f64 * seg_days);
            let index = n.rem_euclid(count as i64) as u8;
            out.push(Transition::new(index, name(index), start, end));
            n += 1;
        }
        out
    }

    fn build(&self, date: NaiveDate, location: &GeoLocation) -> Result<Panchangam, EphemerisError> {
        let sun = rise_set(date, location);
        let next_sun = rise_set(date + Duration::days(1), location);
        // Anchor polar days at local mean 06:00 so tithi is still defined.
        let anchor = sun
            .map(|(rise, _)| rise)
            .unwrap_or_else(|| local_mean_time(date, 6.0, location.longitude_deg));
        let window_end = next_sun
            .map(|(rise, _)| rise)
            .unwrap_or_else(|| add_days(anchor, 1.0));

        let tithi = self.tithi_at(anchor);
        let (masa_index, is_adhika) = self.masa_at(anchor);
        let vaar = Vaar::from_date(date);

        let mut p = Panchangam::new(date, *location, tithi, masa_index, is_adhika, vaar.index())?;
        p = p.with_sun(sun.map(|(r, _)| r), sun.map(|(_, s)| s));

        let elong_deg = self.lunations_since_reference(anchor).rem_euclid(1.0) * 360.0;
        let moonrise = sun.map(|(rise, _)| add_days(rise, elong_deg / 360.0));
        p = p.with_moon(moonrise, moonrise.map(|t| add_days(t, 0.5)));

        p.tithi_transitions = self.segments(
            self.reference_new_moon,
            SYNODIC_MONTH_DAYS,
            30,
            anchor,
            window_end,
            |i| tithi_name(i).to_string(),
        );
        p.karana_transitions = self.segments(
            self.reference_new_moon,
            SYNODIC_MONTH_DAYS,
            60,
            anchor,
            window_end,
            |i| karana_name(i).to_string(),
        );
        p.nakshatra_transitions = self.segments(
            self.reference_new_moon,
            SIDEREAL_MONTH_DAYS,
            27,
            anchor,
            window_end,
            |i| NAKSHATRA_NAMES[i as usize].to_string(),
        );
        // Sum of solar and lunar motion: 360/Tm + 360/Ty degrees per day.
        let yoga_period = 360.0 / (360.0 / SIDEREAL_MONTH_DAYS + 360.0 / SIDEREAL_YEAR_DAYS);
        p.yoga_transitions = self.segments(
            self.reference_new_moon,
            yoga_period,
            27,
            anchor,
            window_end,
            |i| YOGA_NAMES[i as usize].to_string(),
        );

        let sun_lon = (days_between(self.reference_new_moon, anchor) / SIDEREAL_YEAR_DAYS * 360.0
            + 3.0)
            .rem_euclid(360.0);
        let moon_lon = (sun_lon + elong_deg).rem_euclid(360.0);
        p.planets = vec![
            PlanetPosition {
                planet: Planet::Sun,
                longitude_deg: sun_lon,
                sign_index: (sun_lon / 30.0) as u8,
            },
            PlanetPosition {
                planet: Planet::Moon,
                longitude_deg: moon_lon,
                sign_index: (moon_lon / 30.0) as u8,
            },
        ];

        let vijayadashami = self.vijayadashami_flag
            && !is_adhika
            && masa_index == Masa::Ashvina.index()
            && tithi == 9;
        Ok(p.with_vijayadashami(vijayadashami))
    }
}

impl EphemerisProvider for SyntheticEphemeris {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Panchangam, EphemerisError> {
        if !(-90.0..=90.0).contains(&location.latitude_deg)
            || !(-180.0..=180.0).contains(&location.longitude_deg)
        {
            return Err(EphemerisError::Provider(format!(
                "invalid observer coordinates ({}, {})",
                location.latitude_deg, location.longitude_deg
            )));
        }
        self.build(date, location)
    }
}

/// One day of an explicit fixture sequence.
#[derive(Debug, Clone, Copy)]
pub struct DayPlan {
    pub tithi: u8,
    pub masa: Masa,
    pub is_adhika: bool,
}

impl DayPlan {
    pub const fn new(tithi: u8, masa: Masa) -> Self {
        Self {
            tithi,
            masa,
            is_adhika: false,
        }
    }
}

/// Consecutive snapshots starting at `start`, one per plan entry, with
/// sunrise 06:00 and sunset 18:00 local mean time.
pub fn fixed_days(
    location: GeoLocation,
    start: NaiveDate,
    plan: &[DayPlan],
) -> PrecomputedEphemeris {
    let snapshots = plan.iter().enumerate().map(|(i, day)| {
        let date = start + Duration::days(i as i64);
        let sunrise = local_mean_time(date, 6.0, location.longitude_deg);
        let sunset = local_mean_time(date, 18.0, location.longitude_deg);
        Panchangam::new(
            date,
            location,
            day.tithi,
            day.masa.index(),
            day.is_adhika,
            Vaar::from_date(date).index(),
        )
        .expect("fixture indices in range")
        .with_sun(Some(sunrise), Some(sunset))
    });
    PrecomputedEphemeris::from_snapshots(location, snapshots)
}

/// Chinese lunar (month, day) from a mean model anchored on the
/// 2026-02-17 Spring Festival. Leap months are not modelled.
pub fn mean_chinese_lunar(year: i32, month: u32, day: u32) -> Option<(u32, u32)> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let days = (date - ymd(2026, 2, 17)).num_days() as f64;
    let lunation = (days / SYNODIC_MONTH_DAYS).floor();
    let into_month = days - lunation * SYNODIC_MONTH_DAYS;
    let lunar_month = (lunation as i64).rem_euclid(12) as u32 + 1;
    let lunar_day = (into_month.floor() as u32 + 1).min(30);
    Some((lunar_month, lunar_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vesak_2026_is_vaishakha_purnima_at_colombo_sunrise() {
        let p = SyntheticEphemeris::new()
            .panchangam(ymd(2026, 5, 1), &colombo())
            .unwrap();
        assert_eq!(p.tithi, 14);
        assert_eq!(p.masa.masa, Masa::Vaishakha);
    }

    #[test]
    fn transitions_cover_sunrise() {
        let p = SyntheticEphemeris::new()
            .panchangam(ymd(2026, 6, 3), &colombo())
            .unwrap();
        let sunrise = p.sunrise.unwrap();
        for list in [
            &p.tithi_transitions,
            &p.nakshatra_transitions,
            &p.yoga_transitions,
            &p.karana_transitions,
        ] {
            assert!(!list.is_empty());
            assert!(list[0].start <= sunrise && sunrise < list[0].end);
            for w in list.windows(2) {
                assert_eq!(w[0].end, w[1].start);
            }
        }
        assert_eq!(p.tithi_transitions[0].index, p.tithi);
    }

    #[test]
    fn polar_observer_has_no_sunrise() {
        let p = SyntheticEphemeris::new()
            .panchangam(ymd(2026, 6, 21), &tromso())
            .unwrap();
        assert!(p.sunrise.is_none());
        assert!(p.sunset.is_none());
    }

    #[test]
    fn chinese_new_year_2026() {
        assert_eq!(mean_chinese_lunar(2026, 2, 17), Some((1, 1)));
        assert_eq!(mean_chinese_lunar(2026, 2, 30), None);
    }
}
