//! Test fixtures for the sasana workspace.
//!
//! - [`SyntheticEphemeris`]: a mean-motion lunar model anchored on the
//!   new moon of 2026-04-17, so that 2026-05-01 is Vaishakha Purnima at
//!   sunrise for South Asian observers.
//! - [`fixed_days`]: explicit tithi/masa sequences for edge cases (vridhi,
//!   kshaya, polar days) that the mean model never produces.
//! - [`mean_chinese_lunar`]: a Chinese lunar month/day approximation
//!   anchored on the 2026 Spring Festival.

pub mod synthetic;

pub use synthetic::{
    DayPlan, SYNODIC_MONTH_DAYS, SyntheticEphemeris, colombo, fixed_days, kathmandu,
    mean_chinese_lunar, tromso, ymd,
};
