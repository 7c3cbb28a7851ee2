//! Domain types for the todo API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item. `id` and `date` are assigned at creation and never
/// change afterwards; only `done` mutates, via the toggle operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub done: bool,
}

impl Todo {
    pub fn new(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            date: Utc::now(),
            done: false,
        }
    }
}

/// One page of the todo list, as returned by `GET /api/todos`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub total: usize,
    pub pages: usize,
}

/// Response envelope for the create and toggle operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: Todo,
}
