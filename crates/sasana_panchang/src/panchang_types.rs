//! Types for the daily panchangam snapshot produced by the ephemeris.
//!
//! A [`Panchangam`] is the immutable, sunrise-anchored view of one civil
//! day at one location. Everything downstream (uposatha, festivals, hora,
//! timeline) is derived from these values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::EphemerisError;
use crate::masa::{Masa, MasaInfo};
use crate::planet::Planet;
use crate::tithi::{Paksha, TITHI_COUNT};
use crate::vaar::Vaar;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// One interval of a panchang element (tithi, nakshatra, yoga, karana)
/// within the sunrise-to-next-sunrise window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// 0-based index of the element (tithi 0..29, nakshatra 0..26, ...).
    pub index: u8,
    /// Display name.
    pub name: String,
    /// Start of the interval (UTC). May precede sunrise.
    pub start: DateTime<Utc>,
    /// End of the interval (UTC). May follow the next sunrise.
    pub end: DateTime<Utc>,
}

impl Transition {
    pub fn new(
        index: u8,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            start,
            end,
        }
    }
}

/// Sidereal position of a classical planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// 0-based rashi index (0=Mesha .. 11=Meena).
    pub sign_index: u8,
}

/// Daily panchangam snapshot for one civil date and observer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panchangam {
    /// Civil date this snapshot describes.
    pub date: NaiveDate,
    /// Observer location the snapshot was computed for.
    pub location: GeoLocation,
    /// 0-based tithi in effect at sunrise (0..29).
    pub tithi: u8,
    /// Lunar month in effect at sunrise.
    pub masa: MasaInfo,
    /// Fortnight of the sunrise tithi.
    pub paksha: Paksha,
    /// Weekday of the sunrise.
    pub vaar: Vaar,
    /// Sunrise (UTC). None when the sun does not rise (polar day/night).
    pub sunrise: Option<DateTime<Utc>>,
    /// Sunset (UTC).
    pub sunset: Option<DateTime<Utc>>,
    /// Moonrise (UTC).
    pub moonrise: Option<DateTime<Utc>>,
    /// Moonset (UTC).
    pub moonset: Option<DateTime<Utc>>,
    /// Tithi intervals touching the sunrise-to-next-sunrise window.
    pub tithi_transitions: Vec<Transition>,
    /// Nakshatra intervals touching the window.
    pub nakshatra_transitions: Vec<Transition>,
    /// Yoga intervals touching the window.
    pub yoga_transitions: Vec<Transition>,
    /// Karana intervals touching the window.
    pub karana_transitions: Vec<Transition>,
    /// Sidereal planetary positions at sunrise.
    pub planets: Vec<PlanetPosition>,
    /// The provider's own Vijayadashami flag for this day.
    pub is_vijayadashami: bool,
}

impl Panchangam {
    /// Build a snapshot from raw provider indices.
    ///
    /// Validates `tithi` (0..=29), `masa_index` (0..=11), and `vaar_index`
    /// (0..=6, Sunday first). Paksha is derived from the tithi. Rise/set
    /// times and transition lists start empty.
    pub fn new(
        date: NaiveDate,
        location: GeoLocation,
        tithi: u8,
        masa_index: u8,
        is_adhika: bool,
        vaar_index: u8,
    ) -> Result<Self, EphemerisError> {
        if tithi >= TITHI_COUNT {
            return Err(EphemerisError::InvalidTithi(tithi));
        }
        let masa = Masa::from_index(masa_index).ok_or(EphemerisError::InvalidMasa(masa_index))?;
        let vaar = Vaar::from_index(vaar_index).ok_or(EphemerisError::InvalidVaar(vaar_index))?;
        Ok(Self {
            date,
            location,
            tithi,
            masa: MasaInfo::new(masa, is_adhika),
            paksha: Paksha::from_tithi(tithi),
            vaar,
            sunrise: None,
            sunset: None,
            moonrise: None,
            moonset: None,
            tithi_transitions: Vec::new(),
            nakshatra_transitions: Vec::new(),
            yoga_transitions: Vec::new(),
            karana_transitions: Vec::new(),
            planets: Vec::new(),
            is_vijayadashami: false,
        })
    }

    /// Check invariants a provider could have broken after construction.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if self.tithi >= TITHI_COUNT {
            return Err(EphemerisError::InvalidTithi(self.tithi));
        }
        Ok(())
    }

    /// Set sunrise and sunset.
    pub fn with_sun(
        mut self,
        sunrise: Option<DateTime<Utc>>,
        sunset: Option<DateTime<Utc>>,
    ) -> Self {
        self.sunrise = sunrise;
        self.sunset = sunset;
        self
    }

    /// Set moonrise and moonset.
    pub fn with_moon(
        mut self,
        moonrise: Option<DateTime<Utc>>,
        moonset: Option<DateTime<Utc>>,
    ) -> Self {
        self.moonrise = moonrise;
        self.moonset = moonset;
        self
    }

    /// Set the Vijayadashami flag.
    pub fn with_vijayadashami(mut self, flag: bool) -> Self {
        self.is_vijayadashami = flag;
        self
    }

    /// 1-based tithi number for display (1..=30).
    pub fn tithi_number(&self) -> u8 {
        self.tithi + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colombo() -> GeoLocation {
        GeoLocation::new(6.9271, 79.8612, 0.0)
    }

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    #[test]
    fn new_derives_paksha() {
        let p = Panchangam::new(may_first(), colombo(), 14, 1, false, 5).unwrap();
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.masa.masa, Masa::Vaishakha);
        assert_eq!(p.vaar, Vaar::Shukravaar);
        assert_eq!(p.tithi_number(), 15);

        let k = Panchangam::new(may_first(), colombo(), 20, 1, false, 5).unwrap();
        assert_eq!(k.paksha, Paksha::Krishna);
    }

    #[test]
    fn new_rejects_out_of_range_indices() {
        assert_eq!(
            Panchangam::new(may_first(), colombo(), 30, 1, false, 5),
            Err(EphemerisError::InvalidTithi(30))
        );
        assert_eq!(
            Panchangam::new(may_first(), colombo(), 3, 12, false, 5),
            Err(EphemerisError::InvalidMasa(12))
        );
        assert_eq!(
            Panchangam::new(may_first(), colombo(), 3, 1, false, 7),
            Err(EphemerisError::InvalidVaar(7))
        );
    }

    #[test]
    fn validate_catches_mutated_tithi() {
        let mut p = Panchangam::new(may_first(), colombo(), 3, 1, false, 5).unwrap();
        assert!(p.validate().is_ok());
        p.tithi = 31;
        assert_eq!(p.validate(), Err(EphemerisError::InvalidTithi(31)));
    }
}
