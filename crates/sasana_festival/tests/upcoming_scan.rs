//! Year-long upcoming-festival scans.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use sasana_festival::{
    FestivalMatch, FestivalMatcher, LunarDate, Tradition, VAJRAYANA_FESTIVALS,
    upcoming_festivals, upcoming_festivals_async,
};
use sasana_panchang::{CalendarConfig, EphemerisCache, ScanConfig};
use sasana_test_utils::{SyntheticEphemeris, colombo, mean_chinese_lunar, tromso, ymd};

fn chinese_lunar(year: i32, month: u32, day: u32) -> Option<LunarDate> {
    mean_chinese_lunar(year, month, day).map(|(m, d)| LunarDate::new(m, d))
}

fn assert_well_formed(found: &[FestivalMatch], start: NaiveDate, days: u32) {
    let end = start + Duration::days(days as i64);
    for w in found.windows(2) {
        assert!(w[0].date <= w[1].date);
    }
    let keys: HashSet<_> = found.iter().map(|m| (m.festival.id(), m.date)).collect();
    assert_eq!(keys.len(), found.len());
    for m in found {
        assert!(start <= m.date && m.date < end);
        assert_eq!(m.days_remaining, (m.date - start).num_days());
    }
    for f in VAJRAYANA_FESTIVALS {
        for year in start.year()..=end.year() {
            if let Some(date) = f.date_in(year) {
                if start <= date && date < end {
                    assert!(keys.contains(&(f.info.id, date)), "{} {date}", f.info.id);
                }
            }
        }
    }
}

#[test]
fn year_2026_at_colombo() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let cal = chinese_lunar;
    let matcher = FestivalMatcher::new(Some(&cal));
    let start = ymd(2026, 1, 1);
    let found = upcoming_festivals(&matcher, &cache, start, &colombo(), 365);

    assert_well_formed(&found, start, 365);
    let ids: Vec<_> = found.iter().map(|m| m.festival.id()).collect();
    for id in ["vesak", "losar", "ullambana", "pavarana", "bodhi_day", "ambedkar_jayanti"] {
        assert!(ids.contains(&id), "missing {id}");
    }
    let vesak = found.iter().find(|m| m.festival.id() == "vesak").unwrap();
    assert_eq!(vesak.date, ymd(2026, 5, 1));
    assert_eq!(vesak.days_remaining, 120);

    let traditions: HashSet<_> = found.iter().map(|m| m.festival.tradition()).collect();
    assert_eq!(traditions.len(), 3);
    assert!(traditions.contains(&Tradition::Mahayana));
}

#[test]
fn polar_scan_still_lists_table_festivals() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let matcher = FestivalMatcher::new(None);
    let found = upcoming_festivals(&matcher, &cache, ymd(2026, 1, 1), &tromso(), 365);
    let vajrayana = found
        .iter()
        .filter(|m| m.festival.tradition() == Tradition::Vajrayana)
        .count();
    assert_eq!(vajrayana, 6);
}

#[test]
fn scan_outside_tables_has_no_vajrayana() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let matcher = FestivalMatcher::new(None);
    let found = upcoming_festivals(&matcher, &cache, ymd(2030, 1, 1), &colombo(), 365);
    assert!(found.iter().all(|m| m.festival.tradition() != Tradition::Vajrayana));
}

#[tokio::test]
async fn async_scan_matches_sync_scan() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let matcher = FestivalMatcher::new(None);
    let start = ymd(2026, 3, 1);
    let config = ScanConfig::default();
    let sync = upcoming_festivals(&matcher, &cache, start, &colombo(), 120);
    let async_found =
        upcoming_festivals_async(&matcher, &cache, start, &colombo(), 120, &config).await;
    assert_eq!(sync, async_found);
}

#[tokio::test(start_paused = true)]
async fn async_scan_pauses_every_configured_days() {
    let text = "[scan]\nyield_every_days = 7\nyield_pause_ms = 50\n";
    let config = CalendarConfig::from_toml_str(text).unwrap().scan;
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let matcher = FestivalMatcher::new(None);
    let before = tokio::time::Instant::now();
    upcoming_festivals_async(&matcher, &cache, ymd(2026, 3, 1), &colombo(), 70, &config).await;
    // 70 days at one pause per 7 days.
    assert!(before.elapsed() >= std::time::Duration::from_millis(10 * 50));
}

#[tokio::test]
async fn zero_pause_only_yields() {
    let config = ScanConfig {
        yield_pause_ms: 0,
        ..ScanConfig::default()
    };
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let matcher = FestivalMatcher::new(None);
    let found =
        upcoming_festivals_async(&matcher, &cache, ymd(2026, 2, 1), &colombo(), 30, &config).await;
    assert!(found.iter().any(|m| m.festival.id() == "losar"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn scans_are_ordered_and_unique(offset in 0i64..900, days in 1u32..400) {
        let start = ymd(2024, 1, 1) + Duration::days(offset);
        let cache = EphemerisCache::new(SyntheticEphemeris::new());
        let cal = chinese_lunar;
        let matcher = FestivalMatcher::new(Some(&cal));
        let found = upcoming_festivals(&matcher, &cache, start, &colombo(), days);
        assert_well_formed(&found, start, days);
    }
}
