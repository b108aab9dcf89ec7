//! Lookups across the three static festival tables.

use crate::festival_types::BuddhistFestival;
use crate::mahayana::MAHAYANA_FESTIVALS;
use crate::theravada::THERAVADA_FESTIVALS;
use crate::vajrayana::VAJRAYANA_FESTIVALS;

/// Every catalogued festival: Theravada, then Vajrayana, then Mahayana.
pub fn all_festivals() -> impl Iterator<Item = BuddhistFestival> {
    THERAVADA_FESTIVALS
        .iter()
        .map(BuddhistFestival::Theravada)
        .chain(VAJRAYANA_FESTIVALS.iter().map(BuddhistFestival::Vajrayana))
        .chain(MAHAYANA_FESTIVALS.iter().map(BuddhistFestival::Mahayana))
}

/// Look up a festival by its stable id.
pub fn festival_by_id(id: &str) -> Option<BuddhistFestival> {
    all_festivals().find(|f| f.id() == id)
}
