//! API error surface.
//!
//! Every request failure is one of these kinds, rendered as a JSON body
//! of the form `{"error": "<message>"}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The `username` header is missing, or no account matches the
    /// requested username or user id.
    #[error("This username doesn't exist!")]
    UnknownUsername,

    /// The to-do id is not in the requesting user's list.
    #[error("This todo doesn't exist!")]
    TodoNotFound,

    /// The to-do id is not a valid UUID.
    #[error("The id from the todo is not valid!")]
    InvalidTodoId,

    /// The username is already taken by another account.
    #[error("Username already exists")]
    UsernameTaken,

    /// The account is already on the pro plan.
    #[error("Pro plan is already activated.")]
    AlreadyPro,

    /// The free plan's to-do limit has been reached.
    #[error("This plan doesn't allow more than {0} todos. If you want more, take a look at our pro plan!")]
    QuotaExceeded(usize),
}

impl ApiError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownUsername | ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidTodoId | ApiError::UsernameTaken | ApiError::AlreadyPro => {
                StatusCode::BAD_REQUEST
            }
            ApiError::QuotaExceeded(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
