use axum::{
    Router,
    routing::{get, post},
};

use crate::shell::inbound::{clocking, schedule, users};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(users::login))
        .route("/employees", get(users::employees))
        .route("/schedule", get(schedule::week))
        .route("/save-schedule", post(schedule::save))
        .route("/my-shifts", get(schedule::my_shifts))
        .route("/clock-in", post(clocking::clock_in))
        .route("/clock-out", post(clocking::clock_out))
        .route("/clock-status", get(clocking::status))
        .route("/clock-history", get(clocking::history))
        .with_state(state)
}
