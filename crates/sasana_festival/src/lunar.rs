//! Optional Chinese lunar calendar capability.

use serde::Serialize;

/// A Chinese lunar month (1..=12) and day (1..=30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    pub month: u32,
    pub day: u32,
}

impl LunarDate {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Converts Gregorian dates to Chinese lunar dates.
///
/// Mahayana lunar festivals are only matched when a calendar is supplied;
/// without one the detector falls back to its fixed Gregorian dates.
pub trait LunarCalendar {
    /// Lunar date of a Gregorian `year`, `month` (1..=12), `day`, or None
    /// when the date is outside the calendar's range.
    fn lunar_date(&self, year: i32, month: u32, day: u32) -> Option<LunarDate>;
}

impl<F> LunarCalendar for F
where
    F: Fn(i32, u32, u32) -> Option<LunarDate>,
{
    fn lunar_date(&self, year: i32, month: u32, day: u32) -> Option<LunarDate> {
        self(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_calendars() {
        let fixed = |_: i32, m: u32, d: u32| Some(LunarDate::new(m, d));
        let cal: &dyn LunarCalendar = &fixed;
        assert_eq!(cal.lunar_date(2026, 4, 8), Some(LunarDate::new(4, 8)));
    }
}
