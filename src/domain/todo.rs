//! To-do item record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique item id.
    pub id: Uuid,
    /// Short description of the task.
    pub title: String,
    /// When the task is due.
    pub deadline: DateTime<Utc>,
    /// Completion flag; starts false.
    pub done: bool,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a pending to-do stamped with the current time.
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serde() {
        let todo = Todo::new("water the plants", Utc::now());
        let json = serde_json::to_string(&todo).unwrap();
        let decoded: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, todo.id);
        assert_eq!(decoded.title, "water the plants");
        assert!(!decoded.done);
    }
}
