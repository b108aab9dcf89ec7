//! Uposatha classification from sunrise-anchored tithis.
//!
//! A day is a primary Uposatha when its sunrise tithi is Purnima (14),
//! Amavasya (29), an Ashtami (7, 22), or a Chaturdashi (13, 28).
//! Two irregularities of the lunar day against the solar day turn a
//! significant tithi into an optional observance:
//!
//! - Kshaya: tomorrow's sunrise tithi is two ahead of today's, so the
//!   tithi in between never touches a sunrise. If it is significant and
//!   today is not already primary, today is optional; a primary day
//!   instead absorbs its flags.
//! - Vridhi: today's sunrise tithi equals yesterday's. The first sunrise
//!   is primary; today is optional (extended). A significant tithi
//!   skipped after a vridhi day is carried on that day and sets its label.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use log::trace;
use sasana_panchang::{
    EphemerisError, GeoLocation, PanchangSource, Panchangam, TITHI_COUNT, tithi_name,
};

use crate::uposatha_types::{ObservanceBranch, UposathaKind, UposathaStatus};

/// English and Pali labels for a classification branch.
fn labels(kind: Option<UposathaKind>, branch: ObservanceBranch) -> (&'static str, &'static str) {
    use ObservanceBranch::{Kshaya, Ordinary, Primary, Vridhi};
    use UposathaKind::{Ashtami, Chaturdashi, FullMoon, NewMoon};
    match (kind, branch) {
        (Some(FullMoon), Primary) => ("Full Moon Uposatha", "Puṇṇamī Uposatha"),
        (Some(NewMoon), Primary) => ("New Moon Uposatha", "Amāvasī Uposatha"),
        (Some(Ashtami), Primary) => ("Half Moon Uposatha", "Aṭṭhamī Uposatha"),
        (Some(Chaturdashi), Primary) => ("Fourteenth-Day Uposatha", "Cātuddasī Uposatha"),
        (Some(FullMoon), Kshaya) => ("Optional Full Moon (Kshaya)", "Puṇṇamī (khaya)"),
        (Some(NewMoon), Kshaya) => ("Optional New Moon (Kshaya)", "Amāvasī (khaya)"),
        (Some(Ashtami), Kshaya) => ("Optional Half Moon (Kshaya)", "Aṭṭhamī (khaya)"),
        (Some(Chaturdashi), Kshaya) => {
            ("Optional Fourteenth Day (Kshaya)", "Cātuddasī (khaya)")
        }
        (Some(FullMoon), Vridhi) => ("Extended Full Moon (Vridhi)", "Puṇṇamī (vuḍḍhi)"),
        (Some(NewMoon), Vridhi) => ("Extended New Moon (Vridhi)", "Amāvasī (vuḍḍhi)"),
        (Some(Ashtami), Vridhi) => ("Extended Half Moon (Vridhi)", "Aṭṭhamī (vuḍḍhi)"),
        (Some(Chaturdashi), Vridhi) => {
            ("Extended Fourteenth Day (Vridhi)", "Cātuddasī (vuḍḍhi)")
        }
        (None, _) | (_, Ordinary) => ("Ordinary Day", ""),
    }
}

/// Classify a day from its own snapshot and its neighbours' sunrise tithis.
///
/// Pure function: no ephemeris access. `prev_tithi` and `next_tithi` are
/// the sunrise tithis of the previous and following civil days.
pub fn classify_day(prev_tithi: u8, today: Arc<Panchangam>, next_tithi: u8) -> UposathaStatus {
    let tithi = today.tithi;
    let sunrise_kind = UposathaKind::from_tithi(tithi);
    let skipped = (tithi + 1) % TITHI_COUNT;
    let skipped_kind = if next_tithi == (tithi + 2) % TITHI_COUNT {
        UposathaKind::from_tithi(skipped)
    } else {
        None
    };

    let branch = match (sunrise_kind, skipped_kind) {
        (Some(_), _) if prev_tithi == tithi => ObservanceBranch::Vridhi,
        (Some(_), _) => ObservanceBranch::Primary,
        (None, Some(_)) => ObservanceBranch::Kshaya,
        (None, None) => ObservanceBranch::Ordinary,
    };
    let kind = match (sunrise_kind, skipped_kind) {
        (Some(k), Some(s)) => Some(k.more_significant(s)),
        (k, s) => k.or(s),
    };
    // A day whose sunrise tithi is significant also absorbs a significant
    // tithi skipped before the next sunrise, whether the day is primary or
    // the second sunrise of a vridhi.
    let has = |k: UposathaKind| [sunrise_kind, skipped_kind].contains(&Some(k));
    let (label, pali_label) = labels(kind, branch);
    trace!("{}: tithi {tithi} -> {branch:?} {kind:?}", today.date);

    UposathaStatus {
        is_uposatha: branch == ObservanceBranch::Primary,
        is_full_moon: has(UposathaKind::FullMoon),
        is_new_moon: has(UposathaKind::NewMoon),
        is_ashtami: has(UposathaKind::Ashtami),
        is_chaturdashi: has(UposathaKind::Chaturdashi),
        is_optional: matches!(branch, ObservanceBranch::Kshaya | ObservanceBranch::Vridhi),
        is_kshaya: branch == ObservanceBranch::Kshaya,
        is_vridhi: branch == ObservanceBranch::Vridhi,
        tithi_number: tithi + 1,
        tithi_name: tithi_name(tithi),
        paksha: today.paksha,
        label,
        pali_label,
        kind,
        branch,
        sunrise: today.sunrise,
        sunset: today.sunset,
        panchangam: today,
    }
}

fn neighbours(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), EphemerisError> {
    let prev = date.pred_opt().ok_or(EphemerisError::Unavailable { date })?;
    let next = date.succ_opt().ok_or(EphemerisError::Unavailable { date })?;
    Ok((prev, next))
}

/// Resolve the Uposatha status of `date` for an observer.
///
/// Reads the snapshots of the previous, current, and next day. Missing
/// sunrise/sunset (polar days) are carried through as None; only provider
/// failures are errors.
pub fn uposatha_status(
    source: &dyn PanchangSource,
    date: NaiveDate,
    location: &GeoLocation,
) -> Result<UposathaStatus, EphemerisError> {
    let (prev, next) = neighbours(date)?;
    let today = source.panchangam(date, location)?;
    let prev_tithi = source.panchangam(prev, location)?.tithi;
    let next_tithi = source.panchangam(next, location)?.tithi;
    Ok(classify_day(prev_tithi, today, next_tithi))
}

/// Primary and optional observance days in `[start, start + days)`.
pub fn uposatha_calendar(
    source: &dyn PanchangSource,
    start: NaiveDate,
    days: u32,
    location: &GeoLocation,
) -> Result<Vec<UposathaStatus>, EphemerisError> {
    let mut out = Vec::new();
    for offset in 0..days {
        let date = start + Duration::days(offset as i64);
        let status = uposatha_status(source, date, location)?;
        if status.is_observance() {
            out.push(status);
        }
    }
    Ok(out)
}

/// First primary Uposatha on or after `from`, looking at most `max_days`
/// days ahead.
pub fn next_uposatha(
    source: &dyn PanchangSource,
    from: NaiveDate,
    location: &GeoLocation,
    max_days: u32,
) -> Result<Option<UposathaStatus>, EphemerisError> {
    for offset in 0..max_days {
        let date = from + Duration::days(offset as i64);
        let status = uposatha_status(source, date, location)?;
        if status.is_uposatha {
            return Ok(Some(status));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sasana_panchang::{GeoLocation, Masa};

    fn snapshot(tithi: u8) -> Arc<Panchangam> {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let loc = GeoLocation::new(6.9271, 79.8612, 0.0);
        Arc::new(Panchangam::new(date, loc, tithi, Masa::Vaishakha.index(), false, 5).unwrap())
    }

    #[test]
    fn full_moon_is_primary() {
        let s = classify_day(13, snapshot(14), 15);
        assert!(s.is_uposatha && s.is_full_moon);
        assert!(!s.is_optional && !s.is_kshaya && !s.is_vridhi);
        assert_eq!(s.tithi_number, 15);
        assert_eq!(s.tithi_name, "Purnima");
        assert_eq!(s.label, "Full Moon Uposatha");
        assert_eq!(s.pali_label, "Puṇṇamī Uposatha");
    }

    #[test]
    fn new_moon_is_primary() {
        let s = classify_day(28, snapshot(29), 0);
        assert!(s.is_uposatha && s.is_new_moon && !s.is_full_moon);
    }

    #[test]
    fn ashtami_and_chaturdashi_both_fortnights() {
        for t in [7, 22] {
            let s = classify_day(t - 1, snapshot(t), t + 1);
            assert!(s.is_uposatha && s.is_ashtami, "tithi {t}");
        }
        for t in [13, 28] {
            let s = classify_day(t - 1, snapshot(t), t + 1);
            assert!(s.is_uposatha && s.is_chaturdashi, "tithi {t}");
        }
    }

    #[test]
    fn ordinary_day() {
        let s = classify_day(2, snapshot(3), 4);
        assert!(!s.is_uposatha && !s.is_optional);
        assert_eq!(s.kind, None);
        assert_eq!(s.label, "Ordinary Day");
        assert_eq!(s.pali_label, "");
    }

    #[test]
    fn skipped_chaturdashi_is_optional_kshaya() {
        // 12 today, 14 tomorrow: Chaturdashi (13) never meets a sunrise.
        let s = classify_day(11, snapshot(12), 14);
        assert!(!s.is_uposatha);
        assert!(s.is_optional && s.is_kshaya && !s.is_vridhi);
        assert!(s.is_chaturdashi && !s.is_full_moon);
        assert_eq!(s.tithi_number, 13);
        assert_eq!(s.label, "Optional Fourteenth Day (Kshaya)");
    }

    #[test]
    fn skipped_full_moon_is_absorbed_by_primary_chaturdashi() {
        // 13 today, 15 tomorrow: Purnima lies wholly inside today.
        let s = classify_day(12, snapshot(13), 15);
        assert!(s.is_uposatha && !s.is_optional && !s.is_kshaya);
        assert!(s.is_chaturdashi && s.is_full_moon && !s.is_new_moon);
        assert_eq!(s.kind, Some(UposathaKind::FullMoon));
        assert_eq!(s.label, "Full Moon Uposatha");
    }

    #[test]
    fn kshaya_across_month_boundary() {
        // 28 today, 0 tomorrow: Amavasya (29) never meets a sunrise.
        let s = classify_day(27, snapshot(28), 0);
        assert!(s.is_uposatha && s.is_new_moon && s.is_chaturdashi);
        assert!(!s.is_optional);

        // 27 today, 29 tomorrow: the skipped Chaturdashi is optional.
        let s = classify_day(26, snapshot(27), 29);
        assert!(s.is_optional && s.is_kshaya && s.is_chaturdashi);
    }

    #[test]
    fn insignificant_skip_is_ordinary() {
        let s = classify_day(2, snapshot(3), 5);
        assert!(!s.is_optional && !s.is_kshaya);
    }

    #[test]
    fn repeated_full_moon_is_vridhi() {
        let s = classify_day(14, snapshot(14), 15);
        assert!(!s.is_uposatha);
        assert!(s.is_optional && s.is_vridhi && !s.is_kshaya);
        assert!(s.is_full_moon);
        assert_eq!(s.label, "Extended Full Moon (Vridhi)");
    }

    #[test]
    fn vridhi_day_carries_the_tithi_skipped_after_it() {
        // 28, 28, 0: Amavasya starts and ends between the two sunrises.
        let s = classify_day(28, snapshot(28), 0);
        assert!(!s.is_uposatha && !s.is_kshaya);
        assert!(s.is_optional && s.is_vridhi);
        assert!(s.is_chaturdashi && s.is_new_moon);
        assert_eq!(s.kind, Some(UposathaKind::NewMoon));
        assert_eq!(s.label, "Extended New Moon (Vridhi)");

        let s = classify_day(13, snapshot(13), 15);
        assert!(s.is_vridhi && s.is_full_moon && s.is_chaturdashi);
        assert_eq!(s.label, "Extended Full Moon (Vridhi)");
    }

    #[test]
    fn repeated_ordinary_tithi_is_not_vridhi() {
        let s = classify_day(4, snapshot(4), 5);
        assert!(!s.is_vridhi && !s.is_optional);
    }

    #[test]
    fn branch_flags_are_exclusive_for_every_neighbourhood() {
        for t in 0..30u8 {
            for prev in [(t + 29) % 30, t] {
                for next in [t, (t + 1) % 30, (t + 2) % 30] {
                    let s = classify_day(prev, snapshot(t), next);
                    assert!(!(s.is_uposatha && s.is_optional), "t={t} prev={prev} next={next}");
                    assert!(!(s.is_kshaya && s.is_vridhi));
                    assert_eq!(s.is_optional, s.is_kshaya || s.is_vridhi);
                    if let Some(k) = UposathaKind::from_tithi((t + 1) % 30) {
                        if next == (t + 2) % 30 {
                            assert!(s.is_optional || s.is_uposatha, "t={t} prev={prev}");
                            assert_eq!(s.kind.map(|c| c.more_significant(k)), s.kind);
                        }
                    }
                }
            }
        }
    }
}
