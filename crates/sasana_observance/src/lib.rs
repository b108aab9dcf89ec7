//! Per-day observance calculations on top of panchangam snapshots.
//!
//! This crate provides:
//! - Uposatha classification with kshaya/vridhi handling
//! - Planetary hours (hora) for a sunrise-to-sunrise day
//! - Timeline and sun/moon view models on a 0-100 % day window
//!
//! Every calculator reads snapshots through
//! [`PanchangSource`](sasana_panchang::PanchangSource), normally an
//! [`EphemerisCache`](sasana_panchang::EphemerisCache).

pub mod hora;
pub mod hora_types;
pub mod timeline;
pub mod timeline_types;
pub mod uposatha;
pub mod uposatha_types;

pub use hora::{
    CHALDEAN_ORDER, compute_horas, current_hora, day_lord_index, hora_lord, horas_from_boundaries,
};
pub use hora_types::{DAY_HORA_COUNT, HORA_COUNT, HoraSegment};
pub use timeline::{build_timeline_data, celestial_arcs, get_time_percent, window_start};
pub use timeline_types::{
    CelestialArcs, TimelineCategory, TimelineData, TimelineRow, TimelineSegment,
};
pub use uposatha::{classify_day, next_uposatha, uposatha_calendar, uposatha_status};
pub use uposatha_types::{ObservanceBranch, UposathaKind, UposathaStatus};
