use axum::{
    Json,
    extract::{Query, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::session::ClockSession;
use crate::shell::inbound::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockBody {
    pub username: String,
}

#[derive(Deserialize)]
pub struct StatusParams {
    pub username: String,
}

#[derive(Deserialize)]
pub struct HistoryParams {
    pub username: String,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SessionView {
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct StatusView {
    pub active: Option<SessionView>,
}

/// History row: the session plus its worked hours, computed against the
/// server clock while the session is still open.
#[derive(Serialize)]
pub struct HistoryEntryView {
    pub clock_in: DateTime<Utc>,
    pub clock_out: Option<DateTime<Utc>>,
    pub hours: f64,
}

impl From<&ClockSession> for SessionView {
    fn from(session: &ClockSession) -> Self {
        Self {
            clock_in: session.clock_in,
            clock_out: session.clock_out,
        }
    }
}

pub async fn clock_in(
    State(state): State<AppState>,
    body: Result<Json<ClockBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.clock_in.handle(&body.username).await {
        Ok(session) => (StatusCode::CREATED, Json(SessionView::from(&session))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn clock_out(
    State(state): State<AppState>,
    body: Result<Json<ClockBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.clock_out.handle(&body.username).await {
        Ok(session) => Json(SessionView::from(&session)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> impl IntoResponse {
    match state.clocking_queries.active_session(&params.username).await {
        Ok(active) => Json(StatusView {
            active: active.as_ref().map(SessionView::from),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    match state
        .clocking_queries
        .history(&params.username, params.limit)
        .await
    {
        Ok(sessions) => {
            let now = Utc::now();
            let rows: Vec<HistoryEntryView> = sessions
                .iter()
                .map(|session| HistoryEntryView {
                    clock_in: session.clock_in,
                    clock_out: session.clock_out,
                    hours: session.hours_worked(now),
                })
                .collect();
            Json(rows).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod clocking_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::http::router;
    use crate::shell::inbound::test_state::{make_offline_state, make_test_state};
    use crate::shell::state::AppState;

    async fn post(state: &AppState, path: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = router(state.clone())
            .oneshot(
                Request::post(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn get(state: &AppState, path: &str) -> (StatusCode, serde_json::Value) {
        let response = router(state.clone())
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_open_session_on_clock_in() {
        let state = make_test_state();
        let (status, json) = post(&state, "/clock-in", r#"{"username":"anna"}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(json["clock_in"].is_string());
        assert!(json["clock_out"].is_null());
    }

    #[tokio::test]
    async fn it_should_return_409_on_a_second_clock_in() {
        let state = make_test_state();
        post(&state, "/clock-in", r#"{"username":"anna"}"#).await;
        let (status, _) = post(&state, "/clock-in", r#"{"username":"anna"}"#).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_409_on_a_clock_out_without_a_session() {
        let state = make_test_state();
        let (status, _) = post(&state, "/clock-out", r#"{"username":"anna"}"#).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_report_the_active_session_and_clear_it_on_clock_out() {
        let state = make_test_state();
        post(&state, "/clock-in", r#"{"username":"anna"}"#).await;

        let (status, json) = get(&state, "/clock-status?username=anna").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["active"]["clock_in"].is_string());

        let (status, json) = post(&state, "/clock-out", r#"{"username":"anna"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["clock_out"].is_string());

        let (_, json) = get(&state, "/clock-status?username=anna").await;
        assert!(json["active"].is_null());
    }

    #[tokio::test]
    async fn it_should_list_history_with_hours_most_recent_first() {
        let state = make_test_state();
        post(&state, "/clock-in", r#"{"username":"anna"}"#).await;
        post(&state, "/clock-out", r#"{"username":"anna"}"#).await;
        post(&state, "/clock-in", r#"{"username":"anna"}"#).await;

        let (status, json) = get(&state, "/clock-history?username=anna").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        // The still-open session was opened last, so it comes first.
        assert!(rows[0]["clock_out"].is_null());
        assert!(rows[1]["clock_out"].is_string());
        assert!(rows.iter().all(|row| row["hours"].is_number()));
    }

    #[tokio::test]
    async fn it_should_honor_the_history_limit_parameter() {
        let state = make_test_state();
        for _ in 0..3 {
            post(&state, "/clock-in", r#"{"username":"anna"}"#).await;
            post(&state, "/clock-out", r#"{"username":"anna"}"#).await;
        }

        let (_, json) = get(&state, "/clock-history?username=anna&limit=2").await;
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let state = make_test_state();
        let (status, _) = post(&state, "/clock-in", "not-json").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_clock_store_is_offline() {
        let state = make_offline_state();
        let (status, _) = post(&state, "/clock-in", r#"{"username":"anna"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
