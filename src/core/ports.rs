// Ports define what the core needs from the outside world, without
// implementing it.
//
// Purpose
// - Describe the storage capabilities as traits (ScheduleStore, ClockStore,
//   UserDirectory) so handlers stay independent of any backend.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - Implementations must serialize operations on one user's sessions and on
//   one week's schedule; ClockStore::open_session checks the "at most one
//   open session" rule and appends under the same guard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::schedule::WeekSchedule;
use crate::core::session::{ClockError, ClockSession};
use crate::core::user::User;
use crate::core::week::WeekKey;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ClockStoreError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// The saved schedule for a week; an empty schedule if never saved.
    async fn week(&self, week: &WeekKey) -> Result<WeekSchedule, StorageError>;

    /// Replaces the whole week. Last full write wins.
    async fn replace_week(
        &self,
        week: &WeekKey,
        schedule: WeekSchedule,
    ) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ClockStore: Send + Sync {
    /// All sessions for a user, in insertion order. Empty for unknown users.
    async fn sessions(&self, username: &str) -> Result<Vec<ClockSession>, StorageError>;

    /// Opens a session at `clock_in`, failing with AlreadyClockedIn when an
    /// open session exists.
    async fn open_session(
        &self,
        username: &str,
        clock_in: DateTime<Utc>,
    ) -> Result<ClockSession, ClockStoreError>;

    /// Closes the open session at `clock_out`, failing with NoActiveSession
    /// when there is none.
    async fn close_session(
        &self,
        username: &str,
        clock_out: DateTime<Utc>,
    ) -> Result<ClockSession, ClockStoreError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Users with the employee role, for the admin grid's selector.
    async fn employees(&self) -> Result<Vec<User>, StorageError>;
}
