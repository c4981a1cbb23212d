use thiserror::Error;

use crate::core::ports::{ClockStoreError, StorageError};
use crate::core::schedule::ScheduleError;
use crate::core::session::ClockError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ClockStoreError> for ApplicationError {
    fn from(error: ClockStoreError) -> Self {
        match error {
            ClockStoreError::Clock(e) => Self::Clock(e),
            ClockStoreError::Storage(e) => Self::Storage(e),
        }
    }
}
