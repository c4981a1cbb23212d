use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::core::week::WeekKey;
use crate::shell::inbound::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct WeekParams {
    pub week: String,
}

#[derive(Deserialize)]
pub struct MyShiftsParams {
    pub week: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct SaveScheduleBody {
    pub week: String,
    pub assignments: HashMap<String, String>,
}

#[derive(Serialize)]
pub struct ShiftView {
    pub day: String,
    pub time_slot: String,
}

pub async fn week(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> impl IntoResponse {
    let week: WeekKey = match params.week.parse() {
        Ok(w) => w,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.schedule_queries.week(&week).await {
        Ok(schedule) => Json(schedule.entries()).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn my_shifts(
    State(state): State<AppState>,
    Query(params): Query<MyShiftsParams>,
) -> impl IntoResponse {
    let week: WeekKey = match params.week.parse() {
        Ok(w) => w,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state
        .schedule_queries
        .shifts_for_employee(&week, &params.username)
        .await
    {
        Ok(shifts) => Json(
            shifts
                .iter()
                .map(|slot| ShiftView {
                    day: slot.day().to_string(),
                    time_slot: slot.time_slot().to_string(),
                })
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn save(
    State(state): State<AppState>,
    body: Result<Json<SaveScheduleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let week: WeekKey = match body.week.parse() {
        Ok(w) => w,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.save_schedule.handle(&week, body.assignments).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
