//! Normalizes ephemeris transition lists into a 0-100 % day window.
//!
//! The window is anchored at sunrise (or 00:00 UTC of the date when the
//! sun does not rise) and spans 24 hours. Tithi, nakshatra, yoga, and
//! karana rows come straight from the snapshot's transition lists. The
//! weekday row is a single bar from sunrise to sunset.

use chrono::{DateTime, NaiveTime, Utc};
use sasana_panchang::{Panchangam, Transition};

use crate::timeline_types::{
    CelestialArcs, TimelineCategory, TimelineData, TimelineRow, TimelineSegment,
};

const WINDOW_MS: f64 = 24.0 * 3_600_000.0;

/// Position of `instant` in the 24 h window starting at `window_start`,
/// as a percentage clamped to [0, 100].
pub fn get_time_percent(instant: DateTime<Utc>, window_start: DateTime<Utc>) -> f64 {
    let elapsed = (instant - window_start).num_milliseconds() as f64;
    (elapsed / WINDOW_MS * 100.0).clamp(0.0, 100.0)
}

/// Start of the 24 h window for a snapshot.
pub fn window_start(panchangam: &Panchangam) -> DateTime<Utc> {
    panchangam
        .sunrise
        .unwrap_or_else(|| panchangam.date.and_time(NaiveTime::MIN).and_utc())
}

fn segment(
    index: u8,
    label: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    origin: DateTime<Utc>,
    is_primary: bool,
) -> TimelineSegment {
    TimelineSegment {
        index,
        label,
        start,
        end,
        start_percent: get_time_percent(start, origin),
        end_percent: get_time_percent(end, origin),
        is_primary,
    }
}

fn transition_row(
    category: TimelineCategory,
    transitions: &[Transition],
    origin: DateTime<Utc>,
) -> TimelineRow {
    let segments = transitions
        .iter()
        .enumerate()
        .map(|(i, t)| segment(t.index, t.name.clone(), t.start, t.end, origin, i == 0))
        .collect();
    TimelineRow { category, segments }
}

fn weekday_row(panchangam: &Panchangam, origin: DateTime<Utc>) -> TimelineRow {
    let segments = match (panchangam.sunrise, panchangam.sunset) {
        (Some(rise), Some(set)) => vec![segment(
            panchangam.vaar.index(),
            panchangam.vaar.english_name().to_string(),
            rise,
            set,
            origin,
            true,
        )],
        _ => Vec::new(),
    };
    TimelineRow {
        category: TimelineCategory::Weekday,
        segments,
    }
}

/// Build the five timeline rows of a snapshot.
pub fn build_timeline_data(panchangam: &Panchangam) -> TimelineData {
    let origin = window_start(panchangam);
    let rows = TimelineCategory::ALL
        .iter()
        .map(|&category| match category {
            TimelineCategory::Tithi => {
                transition_row(category, &panchangam.tithi_transitions, origin)
            }
            TimelineCategory::Nakshatra => {
                transition_row(category, &panchangam.nakshatra_transitions, origin)
            }
            TimelineCategory::Yoga => {
                transition_row(category, &panchangam.yoga_transitions, origin)
            }
            TimelineCategory::Karana => {
                transition_row(category, &panchangam.karana_transitions, origin)
            }
            TimelineCategory::Weekday => weekday_row(panchangam, origin),
        })
        .collect();
    TimelineData {
        window_start: origin,
        rows,
    }
}

/// Sun and moon rise/set markers for the companion sky view.
pub fn celestial_arcs(panchangam: &Panchangam) -> CelestialArcs {
    let origin = window_start(panchangam);
    let pct = |t: Option<DateTime<Utc>>| t.map(|t| get_time_percent(t, origin));
    CelestialArcs {
        window_start: origin,
        sunrise_percent: pct(panchangam.sunrise),
        sunset_percent: pct(panchangam.sunset),
        moonrise_percent: pct(panchangam.moonrise),
        moonset_percent: pct(panchangam.moonset),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone};
    use sasana_panchang::{GeoLocation, Masa};

    use super::*;

    fn t(h: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap() + Duration::hours(h)
    }

    fn snapshot() -> Panchangam {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let loc = GeoLocation::new(6.9271, 79.8612, 0.0);
        let mut p = Panchangam::new(date, loc, 15, Masa::Vaishakha.index(), false, 1)
            .unwrap()
            .with_sun(Some(t(1)), Some(t(13)))
            .with_moon(Some(t(14)), None);
        p.tithi_transitions = vec![
            Transition::new(15, "Pratipada", t(-5), t(9)),
            Transition::new(16, "Dwitiya", t(9), t(31)),
        ];
        p
    }

    #[test]
    fn percent_endpoints() {
        assert_eq!(get_time_percent(t(0), t(0)), 0.0);
        assert_eq!(get_time_percent(t(24), t(0)), 100.0);
        assert_eq!(get_time_percent(t(6), t(0)), 25.0);
    }

    #[test]
    fn percent_clamped() {
        assert_eq!(get_time_percent(t(-3), t(0)), 0.0);
        assert_eq!(get_time_percent(t(30), t(0)), 100.0);
    }

    #[test]
    fn rows_in_fixed_order() {
        let data = build_timeline_data(&snapshot());
        let cats: Vec<_> = data.rows.iter().map(|r| r.category).collect();
        assert_eq!(cats, TimelineCategory::ALL.to_vec());
        assert_eq!(data.window_start, t(1));
    }

    #[test]
    fn first_transition_is_primary_and_clamped() {
        let data = build_timeline_data(&snapshot());
        let tithi = data.row(TimelineCategory::Tithi).unwrap();
        assert_eq!(tithi.segments.len(), 2);
        assert!(tithi.segments[0].is_primary);
        assert!(!tithi.segments[1].is_primary);
        assert_eq!(tithi.segments[0].start_percent, 0.0);
        assert!((tithi.segments[0].end_percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(tithi.segments[1].end_percent, 100.0);
    }

    #[test]
    fn weekday_spans_sunrise_to_sunset_only() {
        let data = build_timeline_data(&snapshot());
        let vaar = data.row(TimelineCategory::Weekday).unwrap();
        assert_eq!(vaar.segments.len(), 1);
        let seg = &vaar.segments[0];
        assert_eq!(seg.label, "Monday");
        assert_eq!(seg.start_percent, 0.0);
        assert_eq!(seg.end_percent, 50.0);
    }

    #[test]
    fn no_sunrise_anchors_at_midnight_and_drops_weekday_bar() {
        let p = snapshot().with_sun(None, None);
        let data = build_timeline_data(&p);
        assert_eq!(data.window_start, t(0));
        assert!(data.row(TimelineCategory::Weekday).unwrap().segments.is_empty());
    }

    #[test]
    fn arcs_share_the_window() {
        let arcs = celestial_arcs(&snapshot());
        assert_eq!(arcs.sunrise_percent, Some(0.0));
        assert_eq!(arcs.sunset_percent, Some(50.0));
        assert!((arcs.moonrise_percent.unwrap() - 13.0 / 24.0 * 100.0).abs() < 1e-9);
        assert_eq!(arcs.moonset_percent, None);
    }
}
