// In memory implementation of the ScheduleStore port.
//
// Responsibilities
// - Store one WeekSchedule per week key.
// - Replace a week atomically under one write guard; last full write wins.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::ports::{ScheduleStore, StorageError};
use crate::core::schedule::WeekSchedule;
use crate::core::week::WeekKey;

pub struct InMemoryScheduleStore {
    inner: RwLock<HashMap<WeekKey, WeekSchedule>>,
    offline: bool,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Unavailable("schedule store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn week(&self, week: &WeekKey) -> Result<WeekSchedule, StorageError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(week).cloned().unwrap_or_default())
    }

    async fn replace_week(
        &self,
        week: &WeekKey,
        schedule: WeekSchedule,
    ) -> Result<(), StorageError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        guard.insert(*week, schedule);
        Ok(())
    }
}
