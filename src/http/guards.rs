//! Guard functions: pre-handler validation middleware.
//!
//! Each guard either rejects the request with an [`ApiError`] or
//! annotates it with resolved entities via request extensions. Guards on
//! the same route run outermost first, so later ones can rely on what the
//! earlier ones attached.

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use uuid::Uuid;

use crate::domain::User;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Request extension carrying the account a guard resolved.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Request extension carrying the id of a to-do verified to belong to the
/// current user.
#[derive(Debug, Clone, Copy)]
pub struct OwnedTodo(pub Uuid);

/// Resolve the account named by the `username` header.
///
/// Rejects with 404 when the header is missing or names no account.
pub async fn require_user_account(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = header_username(&request)?;
    let user = state.store.user_by_username(&username).await?;

    tracing::debug!(username = %user.username, user_id = %user.id, "Account resolved");

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Enforce the free-plan quota before a to-do is created.
///
/// Runs after [`require_user_account`]; pro accounts are unbounded.
pub async fn check_creation_quota(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let limit = state.quota.free_todo_limit;

    if user.todos.len() >= limit && !user.pro {
        tracing::info!(username = %user.username, limit, "Free plan quota reached");
        return Err(ApiError::QuotaExceeded(limit));
    }

    Ok(next.run(request).await)
}

/// Resolve the `username` header and the `{id}` path segment to a to-do
/// owned by that account.
///
/// Rejection order: unknown username (404), malformed id (400), id absent
/// from the user's list (404). An id that exists under another account is
/// absent here.
pub async fn require_owned_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = header_username(&request)?;
    let user = state.store.user_by_username(&username).await?;

    let todo_id = Uuid::parse_str(&id).map_err(|_| ApiError::InvalidTodoId)?;
    if user.todo(&todo_id).is_none() {
        return Err(ApiError::TodoNotFound);
    }

    request.extensions_mut().insert(CurrentUser(user));
    request.extensions_mut().insert(OwnedTodo(todo_id));
    Ok(next.run(request).await)
}

/// Resolve the `{id}` path segment to an account.
///
/// A malformed id never matches an account, so it rejects with 404 like
/// any unknown id.
pub async fn resolve_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = match Uuid::parse_str(&id) {
        Ok(user_id) => state.store.user_by_id(&user_id).await?,
        Err(_) => return Err(ApiError::UnknownUsername),
    };

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

fn header_username(request: &Request) -> Result<String, ApiError> {
    request
        .headers()
        .get("username")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or(ApiError::UnknownUsername)
}
