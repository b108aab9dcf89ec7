//! Runs the three tradition detectors over one date.

use chrono::NaiveDate;
use sasana_panchang::{EphemerisError, GeoLocation, PanchangSource, Panchangam};

use crate::detector::FestivalDetector;
use crate::festival_types::{BuddhistFestival, Tradition};
use crate::lunar::LunarCalendar;
use crate::mahayana::MahayanaDetector;
use crate::theravada::TheravadaDetector;
use crate::vajrayana::VajrayanaDetector;

/// The Theravada, Vajrayana, and Mahayana detectors, queried in that order.
#[derive(Debug, Clone, Copy)]
pub struct FestivalMatcher<'a> {
    pub theravada: TheravadaDetector,
    pub vajrayana: VajrayanaDetector,
    pub mahayana: MahayanaDetector<'a>,
}

impl<'a> FestivalMatcher<'a> {
    /// `lunar` enables Mahayana lunar festivals; without it only fixed
    /// Mahayana dates are reported.
    pub fn new(lunar: Option<&'a dyn LunarCalendar>) -> Self {
        Self {
            theravada: TheravadaDetector,
            vajrayana: VajrayanaDetector,
            mahayana: MahayanaDetector::new(lunar),
        }
    }

    pub fn detector(&self, tradition: Tradition) -> &dyn FestivalDetector {
        match tradition {
            Tradition::Theravada => &self.theravada,
            Tradition::Vajrayana => &self.vajrayana,
            Tradition::Mahayana => &self.mahayana,
        }
    }

    fn detectors(&self) -> [&dyn FestivalDetector; 3] {
        [&self.theravada, &self.vajrayana, &self.mahayana]
    }

    /// Every tradition's festival on `date`, at most one per tradition.
    pub fn check_all_festivals(
        &self,
        source: &dyn PanchangSource,
        date: NaiveDate,
        location: &GeoLocation,
        snapshot: Option<&Panchangam>,
    ) -> Result<Vec<BuddhistFestival>, EphemerisError> {
        let mut found = Vec::new();
        for detector in self.detectors() {
            if let Some(f) = detector.detect(source, date, location, snapshot)? {
                found.push(f);
            }
        }
        Ok(found)
    }

    /// The first festival on `date` in tradition order.
    pub fn check_festival(
        &self,
        source: &dyn PanchangSource,
        date: NaiveDate,
        location: &GeoLocation,
        snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError> {
        for detector in self.detectors() {
            if let Some(f) = detector.detect(source, date, location, snapshot)? {
                return Ok(Some(f));
            }
        }
        Ok(None)
    }

    /// The festival of one tradition on `date`.
    pub fn check_festival_by_tradition(
        &self,
        tradition: Tradition,
        source: &dyn PanchangSource,
        date: NaiveDate,
        location: &GeoLocation,
        snapshot: Option<&Panchangam>,
    ) -> Result<Option<BuddhistFestival>, EphemerisError> {
        self.detector(tradition)
            .detect(source, date, location, snapshot)
    }
}
