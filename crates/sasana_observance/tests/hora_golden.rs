//! Planetary hours for Colombo on Vesak 2026 (a Friday).

use chrono::Duration;
use proptest::prelude::*;
use sasana_observance::{CHALDEAN_ORDER, compute_horas, current_hora};
use sasana_panchang::{EphemerisCache, PanchangSource, Planet};
use sasana_test_utils::{SyntheticEphemeris, colombo, kathmandu, tromso, ymd};

#[test]
fn friday_starts_with_venus() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let date = ymd(2026, 5, 1);
    let today = cache.panchangam(date, &colombo()).unwrap();
    let sunrise = today.sunrise.unwrap();
    let horas = compute_horas(&cache, date, &colombo(), sunrise + Duration::minutes(30)).unwrap();

    assert_eq!(horas.len(), 24);
    assert_eq!(horas[0].planet, Planet::Venus);
    assert_eq!(horas[1].planet, Planet::Mercury);
    assert_eq!(horas[12].planet, CHALDEAN_ORDER[(4 + 12) % 7]);
    assert_eq!(horas[0].start, sunrise);
    assert_eq!(horas[11].end, today.sunset.unwrap());
    assert_eq!(horas[12].start, today.sunset.unwrap());

    let next = cache.panchangam(ymd(2026, 5, 2), &colombo()).unwrap();
    assert_eq!(horas[23].end, next.sunrise.unwrap());
    // The walk continues into Saturday's first hora.
    assert_eq!(CHALDEAN_ORDER[(horas[23].ruler_index as usize + 1) % 7], Planet::Saturn);

    let current = current_hora(&horas).unwrap();
    assert_eq!(current.hora_number, 1);
}

#[test]
fn polar_observer_has_no_horas() {
    let cache = EphemerisCache::new(SyntheticEphemeris::new());
    let noon = ymd(2026, 6, 21).and_hms_opt(12, 0, 0).unwrap().and_utc();
    let horas = compute_horas(&cache, ymd(2026, 6, 21), &tromso(), noon).unwrap();
    assert!(horas.is_empty());
}

proptest! {
    #[test]
    fn every_day_has_a_full_cyclic_walk(offset in 0i64..365) {
        let cache = EphemerisCache::new(SyntheticEphemeris::new());
        let date = ymd(2026, 1, 1) + Duration::days(offset);
        let sunrise = cache.panchangam(date, &kathmandu()).unwrap().sunrise.unwrap();
        let horas = compute_horas(&cache, date, &kathmandu(), sunrise).unwrap();

        prop_assert_eq!(horas.len(), 24);
        prop_assert_eq!(horas.iter().filter(|h| h.is_day_hora).count(), 12);
        prop_assert_eq!(horas.iter().filter(|h| h.is_current).count(), 1);
        for (i, h) in horas.iter().enumerate() {
            prop_assert_eq!(h.hora_number as usize, i + 1);
            prop_assert!(h.start < h.end);
        }
        for w in horas.windows(2) {
            prop_assert_eq!(w[0].end, w[1].start);
            prop_assert_eq!((w[0].ruler_index + 1) % 7, w[1].ruler_index);
        }
    }
}
