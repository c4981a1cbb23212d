// Week schedules map slot keys to the employee assigned to that slot.
//
// Purpose
// - Represent one week's shift assignments and the rules around them:
//   at most one employee per slot, absent key means unassigned, empty
//   employee selections are dropped rather than stored.
//
// Boundaries
// - No input or output. Persistence lives behind the ScheduleStore port.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::core::week::{DAYS, TIME_SLOTS};

/// One cell in the week grid: a day name paired with a time slot, written
/// as `"{day}_{slot}"` in stored form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    day: String,
    time_slot: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("unknown day: {0}")]
    UnknownDay(String),

    #[error("unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("malformed slot key: {0}")]
    MalformedSlotKey(String),
}

impl SlotKey {
    pub fn new(day: &str, time_slot: &str) -> Result<Self, ScheduleError> {
        if !DAYS.contains(&day) {
            return Err(ScheduleError::UnknownDay(day.to_string()));
        }
        if !TIME_SLOTS.contains(&time_slot) {
            return Err(ScheduleError::UnknownTimeSlot(time_slot.to_string()));
        }
        Ok(Self {
            day: day.to_string(),
            time_slot: time_slot.to_string(),
        })
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.day, self.time_slot)
    }
}

impl FromStr for SlotKey {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time_slot) = s
            .split_once('_')
            .ok_or_else(|| ScheduleError::MalformedSlotKey(s.to_string()))?;
        SlotKey::new(day, time_slot)
    }
}

/// Shift assignments for a single week. A full replace of this map is the
/// unit of saving; there is no slot-level merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    assignments: HashMap<SlotKey, String>,
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from stored-form `"{day}_{slot}" -> username`
    /// entries. Entries with an empty username mean "unassigned" and are
    /// dropped; unknown days or slots are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut schedule = Self::new();
        for (key, username) in entries {
            let slot: SlotKey = key.parse()?;
            schedule.assign(slot, username);
        }
        Ok(schedule)
    }

    /// Assigns an employee to a slot, replacing any previous assignment.
    /// An empty username clears the slot.
    pub fn assign(&mut self, slot: SlotKey, username: impl Into<String>) {
        let username = username.into();
        if username.is_empty() {
            self.assignments.remove(&slot);
        } else {
            self.assignments.insert(slot, username);
        }
    }

    pub fn employee_for(&self, slot: &SlotKey) -> Option<&str> {
        self.assignments.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Stored-form entries, ordered by key for deterministic output.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.assignments
            .iter()
            .map(|(slot, username)| (slot.to_string(), username.clone()))
            .collect()
    }

    /// Slots assigned to one employee, iterating days then time slots in
    /// canonical order so the personal schedule renders chronologically.
    pub fn shifts_for(&self, username: &str) -> Vec<SlotKey> {
        let mut shifts = Vec::new();
        for day in DAYS {
            for time_slot in TIME_SLOTS {
                let slot = SlotKey {
                    day: day.to_string(),
                    time_slot: time_slot.to_string(),
                };
                if self.employee_for(&slot) == Some(username) {
                    shifts.push(slot);
                }
            }
        }
        shifts
    }
}
