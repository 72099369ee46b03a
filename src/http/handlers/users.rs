//! Account endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::domain::User;
use crate::http::error::ApiError;
use crate::http::guards::CurrentUser;
use crate::http::server::AppState;

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
}

/// `POST /users`: register an account.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.store.create_user(&body.name, &body.username).await?;

    tracing::info!(username = %user.username, user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/{id}`: fetch the account resolved by the path guard.
pub async fn get_user(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}

/// `PATCH /users/{id}/pro`: flip the account to the pro plan.
pub async fn upgrade_to_pro(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.upgrade_to_pro(&user.id).await?;

    tracing::info!(username = %user.username, user_id = %user.id, "Pro plan activated");

    Ok(Json(user))
}
