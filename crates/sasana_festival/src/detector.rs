//! The per-tradition detector seam.

use chrono::NaiveDate;
use sasana_panchang::{EphemerisError, GeoLocation, PanchangSource, Panchangam};

use crate::festival_types::{BuddhistFestival, Tradition};

/// Detects the festival, if any, of one tradition on one date.
///
/// `snapshot` is the caller's panchangam for `date` when it already holds
/// one; detectors that need it fetch it from `source` otherwise. At most
/// one festival is returned per date.
pub trait FestivalDetector {
    fn tradition(&self) -> Tradition;

    fn detect(
        &self,
        source: &dyn PanchangSource,
        date: NaiveDate,
        location: &GeoLocation,
        snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError>;
}
