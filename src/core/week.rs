// Week keys partition the schedule per calendar week.
//
// Purpose
// - Derive a WeekKey from any calendar date and format or parse the
//   canonical `YYYY-Www` string used to key stored schedules.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// Canonical day sequence for the schedule grid, Monday through Sunday.
pub const DAYS: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

/// Canonical time slot sequence for the schedule grid.
pub const TIME_SLOTS: [&str; 3] = ["09:00-13:00", "13:00-17:00", "17:00-21:00"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("malformed week key: {0}")]
pub struct WeekKeyParseError(String);

/// Derives the week key for a date.
///
/// Week numbering follows the original scheduler, not ISO 8601:
/// `week = ceil((days_since_jan1 + jan1_weekday + 1) / 7)` with the weekday
/// counted from Sunday. Stored schedules are keyed by these strings, so the
/// formula is kept even where it disagrees with ISO week numbers around the
/// turn of the year.
pub fn week_key_for(date: NaiveDate) -> WeekKey {
    // January 1st of the same year always exists for a valid date.
    let jan1 = date.with_ordinal(1).unwrap_or(date);
    let week = (date.ordinal0() + jan1.weekday().num_days_from_sunday() + 1).div_ceil(7);
    WeekKey {
        year: date.year(),
        week,
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = WeekKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s
            .split_once("-W")
            .ok_or_else(|| WeekKeyParseError(s.to_string()))?;
        let year: i32 = year.parse().map_err(|_| WeekKeyParseError(s.to_string()))?;
        let week: u32 = week.parse().map_err(|_| WeekKeyParseError(s.to_string()))?;
        if week == 0 || week > 54 {
            return Err(WeekKeyParseError(s.to_string()));
        }
        Ok(WeekKey { year, week })
    }
}
