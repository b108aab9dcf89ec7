//! Cache behaviour over a precomputed snapshot table, configured from TOML.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use sasana_panchang::{
    CalendarConfig, EphemerisCache, EphemerisError, GeoLocation, Masa, PanchangSource, Panchangam,
    PrecomputedEphemeris, Vaar,
};

fn lumbini() -> GeoLocation {
    GeoLocation::new(27.4840, 83.2760, 150.0)
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn table(days: u64) -> PrecomputedEphemeris {
    let snapshots = (0..days).map(|i| {
        let date = start() + Days::new(i);
        let tithi = (i % 30) as u8;
        let vaar = Vaar::from_date(date).index();
        Panchangam::new(date, lumbini(), tithi, Masa::Pausha.index(), false, vaar).unwrap()
    });
    PrecomputedEphemeris::from_snapshots(lumbini(), snapshots)
}

#[test]
fn configured_capacity_bounds_the_cache() {
    let config = CalendarConfig::from_toml_str("[cache]\ncapacity = 3\n").unwrap();
    let cache = EphemerisCache::with_config(table(10), config.cache).unwrap();

    for i in 0..5 {
        cache.panchangam(start() + Days::new(i), &lumbini()).unwrap();
    }
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.stats().evictions, 2);
    assert!(!cache.contains(start(), &lumbini()));
    assert!(cache.contains(start() + Days::new(4), &lumbini()));
}

#[test]
fn nearby_coordinates_share_entries() {
    let cache = EphemerisCache::new(table(2));
    let a = cache.panchangam(start(), &lumbini()).unwrap();
    let jitter = GeoLocation::new(27.484_04, 83.276_03, 0.0);
    let b = cache.panchangam(start(), &jitter).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn dates_outside_the_table_are_unavailable() {
    let cache = EphemerisCache::new(table(2));
    let date = start() + Days::new(40);
    assert_eq!(
        cache.panchangam(date, &lumbini()).unwrap_err(),
        EphemerisError::Unavailable { date }
    );
    assert!(cache.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    assert!(CalendarConfig::from_toml_str("[cache]\ncapacity = 0\n").is_err());
    assert!(CalendarConfig::from_toml_str("[scan]\nyield_every_days = 0\n").is_err());
    assert!(CalendarConfig::from_toml_str("[cache]\ncapacity = \"many\"\n").is_err());
}

proptest! {
    #[test]
    fn cache_never_exceeds_capacity(
        capacity in 1usize..20,
        queries in prop::collection::vec(0u64..60, 1..120),
    ) {
        let text = format!("[cache]\ncapacity = {capacity}\n");
        let config = CalendarConfig::from_toml_str(&text).unwrap();
        let cache = EphemerisCache::with_config(table(60), config.cache).unwrap();
        for q in queries {
            let p = cache.panchangam(start() + Days::new(q), &lumbini()).unwrap();
            prop_assert_eq!(p.date, start() + Days::new(q));
            prop_assert!(cache.len() <= capacity);
        }
        let stats = cache.stats();
        prop_assert_eq!(stats.misses - stats.evictions, cache.len() as u64);
    }
}
