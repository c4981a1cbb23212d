pub mod clocking;
pub mod schedule;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse, response::Response};

use crate::application::errors::ApplicationError;

/// Shared error-to-status mapping: clock conflicts are 409, bad schedule
/// input is 422, bad credentials are 401 and storage failures are logged
/// and surfaced as a plain 500.
pub(crate) fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Clock(e) => (StatusCode::CONFLICT, e.to_string()).into_response(),
        ApplicationError::Schedule(e) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        ApplicationError::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
        ApplicationError::Storage(e) => {
            tracing::error!(error = %e, "storage failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
