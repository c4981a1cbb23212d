use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::core::user::{Role, User};
use crate::shell::inbound::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserView {
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            name: user.name().to_string(),
            role: user.role(),
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.directory.login(&body.username, &body.password).await {
        Ok(user) => Json(UserView::from(&user)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn employees(State(state): State<AppState>) -> impl IntoResponse {
    match state.directory.employees().await {
        Ok(users) => Json(users.iter().map(UserView::from).collect::<Vec<_>>()).into_response(),
        Err(e) => error_response(e),
    }
}
