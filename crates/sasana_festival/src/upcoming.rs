//! Upcoming festivals over a bounded window of days.
//!
//! Vajrayana festivals come straight from their yearly tables. Theravada
//! and Mahayana festivals need one snapshot per day, so the window is
//! walked day by day. A day whose snapshot cannot be computed is skipped
//! with a warning. Results are deduplicated on (festival id, date) and
//! sorted by date.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, trace, warn};
use sasana_panchang::{GeoLocation, PanchangSource, ScanConfig};

use crate::detector::FestivalDetector;
use crate::festival_types::{BuddhistFestival, FestivalMatch};
use crate::matcher::FestivalMatcher;
use crate::vajrayana::vajrayana_dates_in;

/// Accumulates matches for one scan window.
struct Scan<'m, 'a> {
    matcher: &'m FestivalMatcher<'a>,
    start: NaiveDate,
    days: u32,
    found: Vec<FestivalMatch>,
    seen: HashSet<(&'static str, NaiveDate)>,
}

impl<'m, 'a> Scan<'m, 'a> {
    fn new(matcher: &'m FestivalMatcher<'a>, start: NaiveDate, days: u32) -> Self {
        Self {
            matcher,
            start,
            days,
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn end(&self) -> NaiveDate {
        self.start + Duration::days(self.days as i64)
    }

    fn push(&mut self, festival: BuddhistFestival, date: NaiveDate) {
        if self.seen.insert((festival.id(), date)) {
            self.found.push(FestivalMatch {
                festival,
                date,
                days_remaining: (date - self.start).num_days(),
            });
        }
    }

    /// Table lookups for every year the window touches.
    fn vajrayana_tables(&mut self) {
        if self.days == 0 {
            return;
        }
        let end = self.end();
        let last_year = (end - Duration::days(1)).year();
        for year in self.start.year()..=last_year {
            for (f, date) in vajrayana_dates_in(year) {
                if self.start <= date && date < end {
                    self.push(BuddhistFestival::Vajrayana(f), date);
                }
            }
        }
    }

    /// Theravada and Mahayana detection for one day.
    fn scan_day(&mut self, source: &dyn PanchangSource, date: NaiveDate, location: &GeoLocation) {
        let snapshot = match source.panchangam(date, location) {
            Ok(p) => p,
            Err(e) => {
                warn!("skipping {date} in festival scan: {e}");
                return;
            }
        };
        let matcher = self.matcher;
        let detectors: [&dyn FestivalDetector; 2] = [&matcher.theravada, &matcher.mahayana];
        for detector in detectors {
            match detector.detect(source, date, location, Some(&*snapshot)) {
                Ok(Some(f)) => {
                    trace!("{date}: {}", f.id());
                    self.push(f, date);
                }
                Ok(None) => {}
                Err(e) => warn!(
                    "skipping {} detection on {date}: {e}",
                    detector.tradition().name()
                ),
            }
        }
    }

    fn finish(mut self) -> Vec<FestivalMatch> {
        self.found.sort_by_key(|m| m.date);
        debug!(
            "festival scan from {} over {} days: {} matches",
            self.start,
            self.days,
            self.found.len()
        );
        self.found
    }
}

/// Festivals in `[start, start + days)`, ascending by date.
pub fn upcoming_festivals(
    matcher: &FestivalMatcher<'_>,
    source: &dyn PanchangSource,
    start: NaiveDate,
    location: &GeoLocation,
    days: u32,
) -> Vec<FestivalMatch> {
    let mut scan = Scan::new(matcher, start, days);
    scan.vajrayana_tables();
    for offset in 0..days {
        scan.scan_day(source, start + Duration::days(offset as i64), location);
    }
    scan.finish()
}

/// [`upcoming_festivals`] that hands control back to the runtime every
/// `config.yield_every_days` days.
///
/// Each yield sleeps for `config.yield_pause()`, or only yields when the
/// pause is zero. The returned future is not `Send`; run it on a
/// current-thread runtime or a `LocalSet`.
pub async fn upcoming_festivals_async(
    matcher: &FestivalMatcher<'_>,
    source: &dyn PanchangSource,
    start: NaiveDate,
    location: &GeoLocation,
    days: u32,
    config: &ScanConfig,
) -> Vec<FestivalMatch> {
    let mut scan = Scan::new(matcher, start, days);
    scan.vajrayana_tables();
    let every = config.yield_every_days.max(1);
    let pause = config.yield_pause();
    for offset in 0..days {
        scan.scan_day(source, start + Duration::days(offset as i64), location);
        if (offset + 1) % every == 0 {
            if pause.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(pause).await;
            }
        }
    }
    scan.finish()
}
