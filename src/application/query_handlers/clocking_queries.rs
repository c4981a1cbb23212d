// Read side of the clock: the status panel and the history table.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::ClockStore;
use crate::core::session::{self, ClockSession, DEFAULT_HISTORY_LIMIT};

pub struct ClockingQueries<S: ClockStore> {
    store: Arc<S>,
}

impl<S: ClockStore> ClockingQueries<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn active_session(
        &self,
        username: &str,
    ) -> Result<Option<ClockSession>, ApplicationError> {
        let sessions = self.store.sessions(username).await?;
        Ok(session::active_session(&sessions).cloned())
    }

    /// Most recent sessions first. `None` applies the default limit of 10.
    pub async fn history(
        &self,
        username: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ClockSession>, ApplicationError> {
        let sessions = self.store.sessions(username).await?;
        Ok(session::history(
            &sessions,
            limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
        ))
    }
}

#[cfg(test)]
mod clocking_queries_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_clock_store::InMemoryClockStore;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    async fn store_with_sessions(count: u32) -> Arc<InMemoryClockStore> {
        let store = Arc::new(InMemoryClockStore::new());
        for hour in 0..count {
            let clock_in = Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap();
            store.open_session("anna", clock_in).await.unwrap();
            store
                .close_session("anna", clock_in + chrono::Duration::minutes(30))
                .await
                .unwrap();
        }
        store
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_no_active_session_for_an_unknown_user() {
        let queries = ClockingQueries::new(Arc::new(InMemoryClockStore::new()));

        let active = queries.active_session("anna").await.unwrap();
        assert!(active.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_open_session() {
        let store = Arc::new(InMemoryClockStore::new());
        let clock_in = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        store.open_session("anna", clock_in).await.unwrap();
        let queries = ClockingQueries::new(store);

        let active = queries
            .active_session("anna")
            .await
            .unwrap()
            .expect("expected an active session");
        assert_eq!(active.clock_in, clock_in);
        assert!(active.is_active());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_cap_history_at_the_default_limit() {
        let queries = ClockingQueries::new(store_with_sessions(12).await);

        let history = queries.history("anna", None).await.unwrap();
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_sort_history_most_recent_first() {
        let queries = ClockingQueries::new(store_with_sessions(3).await);

        let history = queries.history("anna", Some(10)).await.unwrap();
        assert_eq!(history.len(), 3);
        assert!(
            history
                .windows(2)
                .all(|pair| pair[0].clock_in >= pair[1].clock_in)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_honor_an_explicit_limit() {
        let queries = ClockingQueries::new(store_with_sessions(5).await);

        let history = queries.history("anna", Some(2)).await.unwrap();
        assert_eq!(history.len(), 2);
    }
}
