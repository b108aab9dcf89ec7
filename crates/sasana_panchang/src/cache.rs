//! Memoizing wrapper around an [`EphemerisProvider`].
//!
//! Entries are keyed by (ISO date, latitude, longitude) with coordinates
//! rounded to a fixed number of decimals. Once the cache holds more than
//! `capacity` entries, the single oldest-inserted entry is evicted. Reads
//! do not refresh an entry's position, so this is insertion-order eviction
//! and not LRU.
//!
//! The cache uses `RefCell` and is therefore `!Sync`: it serves one
//! thread. A multi-threaded host needs its own lock around it.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::config::CacheConfig;
use crate::error::{ConfigError, EphemerisError};
use crate::panchang_types::{GeoLocation, Panchangam};
use crate::provider::{EphemerisProvider, PanchangSource};

/// Observer coordinates as fixed-point integers at a given precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CoordinateKey {
    lat: i64,
    lon: i64,
}

impl CoordinateKey {
    pub(crate) fn new(location: &GeoLocation) -> Self {
        Self::with_decimals(location, CacheConfig::DEFAULT_COORDINATE_DECIMALS)
    }

    pub(crate) fn with_decimals(location: &GeoLocation, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            lat: (location.latitude_deg * scale).round() as i64,
            lon: (location.longitude_deg * scale).round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    date: NaiveDate,
    coords: CoordinateKey,
}

/// Counters for cache behavior since construction (or the last `clear`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, Arc<Panchangam>>,
    insertion_order: VecDeque<CacheKey>,
    stats: CacheStats,
}

/// Insertion-order bounded cache of panchangam snapshots.
#[derive(Debug)]
pub struct EphemerisCache<P> {
    provider: P,
    config: CacheConfig,
    state: RefCell<CacheState>,
}

impl<P: EphemerisProvider> EphemerisCache<P> {
    /// Wrap a provider with the default bound (500 entries, 4 decimals).
    pub fn new(provider: P) -> Self {
        Self::from_parts(provider, CacheConfig::default())
    }

    /// Wrap a provider with an explicit bound.
    ///
    /// Rejects a zero capacity and more than 9 coordinate decimals.
    pub fn with_config(provider: P, config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(provider, config))
    }

    fn from_parts(provider: P, config: CacheConfig) -> Self {
        Self {
            provider,
            config,
            state: RefCell::new(CacheState::default()),
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.state.borrow().stats
    }

    /// Whether a snapshot for this date and observer is held.
    pub fn contains(&self, date: NaiveDate, location: &GeoLocation) -> bool {
        let key = self.key(date, location);
        self.state.borrow().entries.contains_key(&key)
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&self) {
        *self.state.borrow_mut() = CacheState::default();
    }

    fn key(&self, date: NaiveDate, location: &GeoLocation) -> CacheKey {
        CacheKey {
            date,
            coords: CoordinateKey::with_decimals(location, self.config.coordinate_decimals),
        }
    }

    fn lookup(&self, key: &CacheKey) -> Option<Arc<Panchangam>> {
        let mut state = self.state.borrow_mut();
        let hit = state.entries.get(key).cloned();
        match hit {
            Some(_) => state.stats.hits += 1,
            None => state.stats.misses += 1,
        }
        hit
    }

    fn store(&self, key: CacheKey, value: Arc<Panchangam>) {
        let mut state = self.state.borrow_mut();
        if state.entries.insert(key, value).is_none() {
            state.insertion_order.push_back(key);
        }
        if state.entries.len() > self.config.capacity {
            if let Some(oldest) = state.insertion_order.pop_front() {
                state.entries.remove(&oldest);
                state.stats.evictions += 1;
                debug!("ephemeris cache evicted {}", oldest.date);
            }
        }
    }
}

impl<P: EphemerisProvider> PanchangSource for EphemerisCache<P> {
    fn panchangam(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<Arc<Panchangam>, EphemerisError> {
        let key = self.key(date, location);
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }
        debug!(
            "ephemeris cache miss for {date} at ({:.4}, {:.4})",
            location.latitude_deg, location.longitude_deg
        );
        let fresh = self.provider.panchangam(date, location)?;
        fresh.validate()?;
        let shared = Arc::new(fresh);
        self.store(key, Arc::clone(&shared));
        Ok(shared)
    }
}
