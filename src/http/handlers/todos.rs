//! To-do endpoints.
//!
//! Every route here sits behind a guard that resolves the `username`
//! header (and, for the item routes, the `{id}` path segment) before the
//! handler runs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::Todo;
use crate::http::error::ApiError;
use crate::http::guards::{CurrentUser, OwnedTodo};
use crate::http::server::AppState;

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub title: String,
    pub deadline: DateTime<Utc>,
}

/// `GET /todos`: the requesting user's to-dos in creation order.
pub async fn list_todos(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<Vec<Todo>> {
    Json(user.todos)
}

/// `POST /todos`: append a new pending to-do.
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<TodoPayload>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state
        .store
        .add_todo(&user.id, &body.title, body.deadline)
        .await?;

    tracing::info!(username = %user.username, todo_id = %todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /todos/{id}`: overwrite title and deadline.
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(OwnedTodo(todo_id)): Extension<OwnedTodo>,
    Json(body): Json<TodoPayload>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .update_todo(&user.id, &todo_id, &body.title, body.deadline)
        .await?;

    Ok(Json(todo))
}

/// `PATCH /todos/{id}/done`: mark the to-do as done.
pub async fn complete_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(OwnedTodo(todo_id)): Extension<OwnedTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.complete_todo(&user.id, &todo_id).await?;

    tracing::debug!(username = %user.username, todo_id = %todo.id, "Todo completed");

    Ok(Json(todo))
}

/// `DELETE /todos/{id}`: remove the to-do from its owner's list.
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(OwnedTodo(todo_id)): Extension<OwnedTodo>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_todo(&user.id, &todo_id).await?;

    tracing::debug!(username = %user.username, todo_id = %todo_id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
