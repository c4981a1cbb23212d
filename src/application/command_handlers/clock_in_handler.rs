// Clock-in command handler.
//
// Responsibilities
// - Take the current timestamp and ask the clock store to open a session.
// - The store enforces the single-open-session rule under its own guard; the
//   handler only translates errors and logs the mutation.

use std::sync::Arc;

use chrono::Utc;

use crate::application::errors::ApplicationError;
use crate::core::ports::ClockStore;
use crate::core::session::ClockSession;

pub struct ClockInHandler<S: ClockStore> {
    store: Arc<S>,
}

impl<S: ClockStore> ClockInHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, username: &str) -> Result<ClockSession, ApplicationError> {
        let session = self.store.open_session(username, Utc::now()).await?;
        tracing::info!(username, clock_in = %session.clock_in, "clocked in");
        Ok(session)
    }
}
