// Read side of the schedule: the admin grid and the personal shift list.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::ScheduleStore;
use crate::core::schedule::{SlotKey, WeekSchedule};
use crate::core::week::WeekKey;

pub struct ScheduleQueries<S: ScheduleStore> {
    store: Arc<S>,
}

impl<S: ScheduleStore> ScheduleQueries<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The full week grid. A week that was never saved is an empty schedule,
    /// not an error.
    pub async fn week(&self, week: &WeekKey) -> Result<WeekSchedule, ApplicationError> {
        Ok(self.store.week(week).await?)
    }

    /// One employee's shifts for a week, days then slots in canonical order.
    pub async fn shifts_for_employee(
        &self,
        week: &WeekKey,
        username: &str,
    ) -> Result<Vec<SlotKey>, ApplicationError> {
        let schedule = self.store.week(week).await?;
        Ok(schedule.shifts_for(username))
    }
}
