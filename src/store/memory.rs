//! The in-memory user and to-do collection.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Todo, User};
use crate::http::error::ApiError;

/// Process-wide store holding every account and its to-dos.
///
/// Users are kept in registration order, each user's to-dos in creation
/// order. Lookups return snapshots; mutations take the write lock for the
/// duration of the operation.
#[derive(Debug, Default)]
pub struct TodoStore {
    users: RwLock<Vec<User>>,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account.
    ///
    /// Rejects a username that is already taken, leaving the store
    /// untouched.
    pub async fn create_user(&self, name: &str, username: &str) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.username == username) {
            return Err(ApiError::UsernameTaken);
        }

        let user = User::new(name, username);
        users.push(user.clone());
        Ok(user)
    }

    /// Fetch an account snapshot by id.
    pub async fn user_by_id(&self, id: &Uuid) -> Result<User, ApiError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.id == *id)
            .cloned()
            .ok_or(ApiError::UnknownUsername)
    }

    /// Fetch an account snapshot by username.
    pub async fn user_by_username(&self, username: &str) -> Result<User, ApiError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.username == username)
            .cloned()
            .ok_or(ApiError::UnknownUsername)
    }

    /// Flip an account to the pro plan.
    ///
    /// Rejects a second upgrade; the flag stays set.
    pub async fn upgrade_to_pro(&self, id: &Uuid) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = Self::user_mut(&mut users, id)?;

        if user.pro {
            return Err(ApiError::AlreadyPro);
        }

        user.pro = true;
        Ok(user.clone())
    }

    /// Append a new pending to-do to an account's list.
    pub async fn add_todo(
        &self,
        user_id: &Uuid,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = Self::user_mut(&mut users, user_id)?;

        let todo = Todo::new(title, deadline);
        user.todos.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite a to-do's title and deadline.
    pub async fn update_todo(
        &self,
        user_id: &Uuid,
        todo_id: &Uuid,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = Self::user_mut(&mut users, user_id)?;
        let todo = user.todo_mut(todo_id).ok_or(ApiError::TodoNotFound)?;

        todo.title = title.to_owned();
        todo.deadline = deadline;
        Ok(todo.clone())
    }

    /// Mark a to-do as done.
    pub async fn complete_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = Self::user_mut(&mut users, user_id)?;
        let todo = user.todo_mut(todo_id).ok_or(ApiError::TodoNotFound)?;

        todo.done = true;
        Ok(todo.clone())
    }

    /// Remove a to-do from its owner's list.
    pub async fn delete_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> Result<(), ApiError> {
        let mut users = self.users.write().await;
        let user = Self::user_mut(&mut users, user_id)?;

        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == *todo_id)
            .ok_or(ApiError::TodoNotFound)?;

        user.todos.remove(index);
        Ok(())
    }

    fn user_mut<'a>(users: &'a mut Vec<User>, id: &Uuid) -> Result<&'a mut User, ApiError> {
        users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or(ApiError::UnknownUsername)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_username_is_rejected_and_store_unchanged() {
        let store = TodoStore::new();
        store.create_user("Alice", "alice").await.unwrap();

        let err = store.create_user("Other Alice", "alice").await.unwrap_err();
        assert_eq!(err, ApiError::UsernameTaken);

        let user = store.user_by_username("alice").await.unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn upgrade_is_one_way() {
        let store = TodoStore::new();
        let user = store.create_user("Bob", "bob").await.unwrap();

        let upgraded = store.upgrade_to_pro(&user.id).await.unwrap();
        assert!(upgraded.pro);

        let err = store.upgrade_to_pro(&user.id).await.unwrap_err();
        assert_eq!(err, ApiError::AlreadyPro);
        assert!(store.user_by_id(&user.id).await.unwrap().pro);
    }

    #[tokio::test]
    async fn todos_are_kept_in_creation_order() {
        let store = TodoStore::new();
        let user = store.create_user("Carol", "carol").await.unwrap();

        let first = store.add_todo(&user.id, "first", Utc::now()).await.unwrap();
        let second = store.add_todo(&user.id, "second", Utc::now()).await.unwrap();

        let todos = store.user_by_id(&user.id).await.unwrap().todos;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, first.id);
        assert_eq!(todos[1].id, second.id);
    }

    #[tokio::test]
    async fn todos_are_isolated_per_user() {
        let store = TodoStore::new();
        let owner = store.create_user("Dave", "dave").await.unwrap();
        let other = store.create_user("Eve", "eve").await.unwrap();
        let todo = store.add_todo(&owner.id, "secret", Utc::now()).await.unwrap();

        let err = store.complete_todo(&other.id, &todo.id).await.unwrap_err();
        assert_eq!(err, ApiError::TodoNotFound);

        let owned = store.user_by_id(&owner.id).await.unwrap().todos;
        assert!(!owned[0].done);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = TodoStore::new();
        let user = store.create_user("Frank", "frank").await.unwrap();
        let kept = store.add_todo(&user.id, "keep", Utc::now()).await.unwrap();
        let dropped = store.add_todo(&user.id, "drop", Utc::now()).await.unwrap();

        store.delete_todo(&user.id, &dropped.id).await.unwrap();

        let todos = store.user_by_id(&user.id).await.unwrap().todos;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, kept.id);

        let err = store.delete_todo(&user.id, &dropped.id).await.unwrap_err();
        assert_eq!(err, ApiError::TodoNotFound);
    }

    #[tokio::test]
    async fn update_overwrites_title_and_deadline() {
        let store = TodoStore::new();
        let user = store.create_user("Grace", "grace").await.unwrap();
        let todo = store.add_todo(&user.id, "draft", Utc::now()).await.unwrap();

        let new_deadline = Utc::now() + chrono::Duration::days(7);
        let updated = store
            .update_todo(&user.id, &todo.id, "final", new_deadline)
            .await
            .unwrap();

        assert_eq!(updated.title, "final");
        assert_eq!(updated.deadline, new_deadline);
        assert_eq!(updated.created_at, todo.created_at);
    }
}
