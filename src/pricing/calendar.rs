//! Night classification for resort pricing.
//!
//! A "night" is one calendar date within a stay. The resort charges its
//! weekend rate on Friday and Saturday nights, not the ISO Saturday/Sunday
//! weekend: Sunday through Thursday check-outs are quiet, so the high-rate
//! window is shifted one day earlier. Keep `RESORT_WEEKEND` as the single
//! source of truth for that rule.

use chrono::{Datelike, NaiveDate, Weekday};

/// Days of week billed at the weekend rate.
pub const RESORT_WEEKEND: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

/// Rate class for a single night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightRate {
    Weekday,
    Weekend,
}

/// Classify one night as weekday-rate or weekend-rate.
///
/// Pure and total: every valid date maps to exactly one rate.
pub fn classify_night(date: NaiveDate) -> NightRate {
    if RESORT_WEEKEND.contains(&date.weekday()) {
        NightRate::Weekend
    } else {
        NightRate::Weekday
    }
}

/// Per-rate night counts for a stay.
///
/// Derived per request and never persisted. `weekend + weekday` always
/// equals the stay's total nights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NightTally {
    pub weekday_nights: i64,
    pub weekend_nights: i64,
}

impl NightTally {
    pub fn add(&mut self, rate: NightRate) {
        match rate {
            NightRate::Weekday => self.weekday_nights += 1,
            NightRate::Weekend => self.weekend_nights += 1,
        }
    }

    pub fn total_nights(&self) -> i64 {
        self.weekday_nights + self.weekend_nights
    }
}
