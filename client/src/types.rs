//! DTOs for the todo API.
//!
//! # Design
//! Defined independently from the server crate; deserializing into these
//! types is the client's schema validation, and the integration tests catch
//! any drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub content: String,
    pub date: DateTime<Utc>,
    pub done: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

/// One page of the todo list: the windowed records plus total count and
/// number of pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub total: usize,
    pub pages: usize,
}
