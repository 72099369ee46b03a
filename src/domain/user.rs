//! User account record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::todo::Todo;

/// A registered account and the to-dos it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique account id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique lookup key, matched against the `username` request header.
    pub username: String,
    /// Pro-plan flag; removes the to-do quota when set.
    pub pro: bool,
    /// Owned to-dos in creation order.
    pub todos: Vec<Todo>,
}

impl User {
    /// Create a fresh account with an empty to-do list on the free plan.
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            pro: false,
            todos: Vec::new(),
        }
    }

    /// Find an owned to-do by id.
    pub fn todo(&self, id: &Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == *id)
    }

    pub(crate) fn todo_mut(&mut self, id: &Uuid) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == *id)
    }
}
