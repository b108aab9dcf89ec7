//! Ephemeris access seams.
//!
//! [`EphemerisProvider`] is the external astronomical engine: it produces
//! an owned [`Panchangam`] for a date and observer. [`PanchangSource`] is
//! what the rest of the workspace consumes: shared, immutable snapshots,
//! normally served by an [`EphemerisCache`](crate::EphemerisCache).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::cache::CoordinateKey;
use crate::error::EphemerisError;
use crate::panchang_types::{GeoLocation, Panchangam};

/// External ephemeris: computes the sunrise-anchored panchangam of a day.
///
/// Implementations are expected to be synchronous and fast. Errors (for
/// instance invalid observer coordinates) propagate to the caller.
pub trait EphemerisProvider {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Panchangam, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Panchangam, EphemerisError> {
        (**self).panchangam(date, location)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Panchangam, EphemerisError> {
        (**self).panchangam(date, location)
    }
}

/// Source of shared panchangam snapshots, consumed by every calculator.
pub trait PanchangSource {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Arc<Panchangam>, EphemerisError>;
}

/// Provider over snapshots computed offline for a single observer.
///
/// Requests for other dates fail with [`EphemerisError::Unavailable`];
/// requests for a different observer (compared at 4-decimal precision)
/// fail with [`EphemerisError::Provider`].
#[derive(Debug, Clone)]
pub struct PrecomputedEphemeris {
    location: GeoLocation,
    days: HashMap<NaiveDate, Panchangam>,
}

impl PrecomputedEphemeris {
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location,
            days: HashMap::new(),
        }
    }

    /// Build from an iterator of snapshots; later dates replace earlier ones.
    pub fn from_snapshots(
        location: GeoLocation,
        snapshots: impl IntoIterator<Item = Panchangam>,
    ) -> Self {
        let mut table = Self::new(location);
        for p in snapshots {
            table.insert(p);
        }
        table
    }

    /// Insert or replace the snapshot for its date.
    pub fn insert(&mut self, panchangam: Panchangam) {
        self.days.insert(panchangam.date, panchangam);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Observer the table was computed for.
    pub fn location(&self) -> GeoLocation {
        self.location
    }
}

impl EphemerisProvider for PrecomputedEphemeris {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Panchangam, EphemerisError> {
        if CoordinateKey::new(location) != CoordinateKey::new(&self.location) {
            return Err(EphemerisError::Provider(format!(
                "table computed for ({:.4}, {:.4}), requested ({:.4}, {:.4})",
                self.location.latitude_deg,
                self.location.longitude_deg,
                location.latitude_deg,
                location.longitude_deg
            )));
        }
        self.days
            .get(&date)
            .cloned()
            .ok_or(EphemerisError::Unavailable { date })
    }
}
