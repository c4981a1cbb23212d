// Clock-out command handler.
//
// Responsibilities
// - Close the user's open session at the current timestamp, surfacing
//   NoActiveSession when there is nothing to close.

use std::sync::Arc;

use chrono::Utc;

use crate::application::errors::ApplicationError;
use crate::core::ports::ClockStore;
use crate::core::session::ClockSession;

pub struct ClockOutHandler<S: ClockStore> {
    store: Arc<S>,
}

impl<S: ClockStore> ClockOutHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, username: &str) -> Result<ClockSession, ApplicationError> {
        let session = self.store.close_session(username, Utc::now()).await?;
        tracing::info!(username, clock_out = ?session.clock_out, "clocked out");
        Ok(session)
    }
}
