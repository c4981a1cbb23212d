// Clock sessions and the pure decision functions for clocking in and out.
//
// Purpose
// - Represent one work session (clock-in required, clock-out optional) and
//   enforce the single rule of the clock: at most one open session per user.
//
// Responsibilities
// - decide_clock_in / decide_clock_out validate against the user's session
//   list and never perform input or output; the store applies the outcome
//   under its own lock.
//
// Testing guidance
// - Feed a session list and assert the decision; no store is needed.

use chrono::{DateTime, Utc};

/// Default number of sessions shown in the history panel.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSession {
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("already clocked in")]
    AlreadyClockedIn,

    #[error("no active session")]
    NoActiveSession,
}

impl ClockSession {
    pub fn open(clock_in: DateTime<Utc>) -> Self {
        Self {
            clock_in,
            clock_out: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Elapsed hours between clock-in and clock-out, or between clock-in and
    /// `now` for an open session. `now` is caller-supplied so the value is
    /// reproducible.
    pub fn hours_worked(&self, now: DateTime<Utc>) -> f64 {
        let end = self.clock_out.unwrap_or(now);
        (end - self.clock_in).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }
}

/// The open session in a list, if any. The invariant keeps this unique.
pub fn active_session(sessions: &[ClockSession]) -> Option<&ClockSession> {
    sessions.iter().find(|session| session.is_active())
}

/// Validates a clock-in against existing sessions and produces the new open
/// session on success.
pub fn decide_clock_in(
    sessions: &[ClockSession],
    clock_in: DateTime<Utc>,
) -> Result<ClockSession, ClockError> {
    if active_session(sessions).is_some() {
        return Err(ClockError::AlreadyClockedIn);
    }
    Ok(ClockSession::open(clock_in))
}

/// Picks the session a clock-out closes: the most recently opened still-open
/// one. Returns its index so the caller can mutate in place.
pub fn decide_clock_out(sessions: &[ClockSession]) -> Result<usize, ClockError> {
    sessions
        .iter()
        .enumerate()
        .filter(|(_, session)| session.is_active())
        .max_by_key(|(_, session)| session.clock_in)
        .map(|(index, _)| index)
        .ok_or(ClockError::NoActiveSession)
}

/// Most recent sessions first, truncated to `limit`.
pub fn history(sessions: &[ClockSession], limit: usize) -> Vec<ClockSession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.clock_in.cmp(&a.clock_in));
    sorted.truncate(limit);
    sorted
}
