// Save-schedule command handler.
//
// Responsibilities
// - Normalize raw `"{day}_{slot}" -> username` entries into a WeekSchedule
//   (dropping empty selections, rejecting unknown days or slots) and replace
//   the whole week in the store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::ScheduleStore;
use crate::core::schedule::WeekSchedule;
use crate::core::week::WeekKey;

pub struct SaveScheduleHandler<S: ScheduleStore> {
    store: Arc<S>,
}

impl<S: ScheduleStore> SaveScheduleHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        week: &WeekKey,
        assignments: HashMap<String, String>,
    ) -> Result<(), ApplicationError> {
        let schedule = WeekSchedule::from_entries(assignments)?;
        let slots = schedule.len();
        self.store.replace_week(week, schedule).await?;
        tracing::info!(week = %week, slots, "schedule saved");
        Ok(())
    }
}
