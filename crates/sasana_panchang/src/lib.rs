//! Panchangam snapshots and ephemeris access for the sasana engine.
//!
//! This crate provides:
//! - Vocabulary enums: [`Masa`], [`Paksha`], [`Vaar`], [`Planet`]
//! - The immutable daily [`Panchangam`] snapshot and its parts
//! - The [`EphemerisProvider`] seam to an external astronomical engine
//! - [`EphemerisCache`], an insertion-order bounded memoizing wrapper
//! - [`PrecomputedEphemeris`] for snapshots computed offline
//! - [`CalendarConfig`] loaded from TOML
//!
//! The astronomy itself (tithi, masa, rise/set) is out of scope here;
//! it is consumed through [`EphemerisProvider`].

pub mod cache;
pub mod config;
pub mod error;
pub mod masa;
pub mod panchang_types;
pub mod planet;
pub mod provider;
pub mod tithi;
pub mod vaar;

pub use cache::{CacheStats, EphemerisCache};
pub use config::{CacheConfig, CalendarConfig, ScanConfig};
pub use error::{ConfigError, EphemerisError};
pub use masa::{ALL_MASAS, Masa, MasaInfo};
pub use panchang_types::{GeoLocation, Panchangam, PlanetPosition, Transition};
pub use planet::{ALL_PLANETS, Planet};
pub use provider::{EphemerisProvider, PanchangSource, PrecomputedEphemeris};
pub use tithi::{AMAVASYA, PURNIMA, Paksha, TITHI_COUNT, tithi_in_paksha, tithi_name};
pub use vaar::{ALL_VAARS, Vaar};
