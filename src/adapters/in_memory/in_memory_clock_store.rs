// In memory implementation of the ClockStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store sessions per user in memory.
// - Enforce the single-open-session rule by running the decision and the
//   append under one write guard, so two near-simultaneous clock-ins for the
//   same user cannot both succeed.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::ports::{ClockStore, ClockStoreError, StorageError};
use crate::core::session::{ClockSession, decide_clock_in, decide_clock_out};

pub struct InMemoryClockStore {
    inner: RwLock<HashMap<String, Vec<ClockSession>>>,
    offline: bool,
}

impl InMemoryClockStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
        }
    }

    /// Flips the store into (or out of) a failing state, for tests that
    /// exercise the storage-unavailable path.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Unavailable("clock store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryClockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClockStore for InMemoryClockStore {
    async fn sessions(&self, username: &str) -> Result<Vec<ClockSession>, StorageError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(username).cloned().unwrap_or_default())
    }

    async fn open_session(
        &self,
        username: &str,
        clock_in: DateTime<Utc>,
    ) -> Result<ClockSession, ClockStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let sessions = guard.entry(username.to_string()).or_default();
        let session = decide_clock_in(sessions, clock_in)?;
        sessions.push(session.clone());
        Ok(session)
    }

    async fn close_session(
        &self,
        username: &str,
        clock_out: DateTime<Utc>,
    ) -> Result<ClockSession, ClockStoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let sessions = guard.entry(username.to_string()).or_default();
        let index = decide_clock_out(sessions)?;
        sessions[index].clock_out = Some(clock_out);
        Ok(sessions[index].clone())
    }
}
