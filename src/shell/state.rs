use std::sync::Arc;

use crate::adapters::in_memory::in_memory_clock_store::InMemoryClockStore;
use crate::adapters::in_memory::in_memory_schedule_store::InMemoryScheduleStore;
use crate::adapters::in_memory::in_memory_user_directory::InMemoryUserDirectory;
use crate::application::command_handlers::clock_in_handler::ClockInHandler;
use crate::application::command_handlers::clock_out_handler::ClockOutHandler;
use crate::application::command_handlers::save_schedule_handler::SaveScheduleHandler;
use crate::application::query_handlers::clocking_queries::ClockingQueries;
use crate::application::query_handlers::directory_queries::DirectoryQueries;
use crate::application::query_handlers::schedule_queries::ScheduleQueries;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryQueries<InMemoryUserDirectory>>,
    pub schedule_queries: Arc<ScheduleQueries<InMemoryScheduleStore>>,
    pub save_schedule: Arc<SaveScheduleHandler<InMemoryScheduleStore>>,
    pub clock_in: Arc<ClockInHandler<InMemoryClockStore>>,
    pub clock_out: Arc<ClockOutHandler<InMemoryClockStore>>,
    pub clocking_queries: Arc<ClockingQueries<InMemoryClockStore>>,
}

impl AppState {
    /// Wires every handler onto the given in-memory adapters. Used by the
    /// binary's composition root and by router tests.
    pub fn in_memory(
        directory: Arc<InMemoryUserDirectory>,
        schedule_store: Arc<InMemoryScheduleStore>,
        clock_store: Arc<InMemoryClockStore>,
    ) -> Self {
        Self {
            directory: Arc::new(DirectoryQueries::new(directory)),
            schedule_queries: Arc::new(ScheduleQueries::new(schedule_store.clone())),
            save_schedule: Arc::new(SaveScheduleHandler::new(schedule_store)),
            clock_in: Arc::new(ClockInHandler::new(clock_store.clone())),
            clock_out: Arc::new(ClockOutHandler::new(clock_store.clone())),
            clocking_queries: Arc::new(ClockingQueries::new(clock_store)),
        }
    }
}
