//! In-memory todo store and repository operations.
//!
//! # Design
//! `TodoStore` owns a plain ordered `Vec<Todo>` and is constructed
//! explicitly, then injected into the router as shared state. Nothing here is
//! process-global, so every test can run against its own store. Lookups are
//! linear scans; the list never grows past what a demo server holds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use uuid::Uuid;

use crate::model::{Todo, TodoPage};

/// Errors returned by store mutations. The router maps these to HTTP
/// responses via `IntoResponse`; no other layer assigns status codes.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No todo with the given id exists.
    NotFound { id: String },
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "Todo id: {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Ordered, in-memory collection of todos.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Empty store, for tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the two seed records, most recently seeded
    /// first.
    pub fn seeded() -> Self {
        let mut todos = vec![Todo::new("Todo 1"), Todo::new("Todo 2")];
        todos.reverse();
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Window `[(page-1)*limit, page*limit)` over the full list. Pages past
    /// the end yield an empty slice with `total` and `pages` unchanged.
    ///
    /// `limit` must be non-zero; the router enforces that before calling.
    pub fn page(&self, page: usize, limit: usize) -> TodoPage {
        let total = self.todos.len();
        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(total);

        let todos = if start >= total {
            Vec::new()
        } else {
            self.todos[start..end].to_vec()
        };

        TodoPage {
            todos,
            total,
            pages: total.div_ceil(limit),
        }
    }

    /// Append a new todo with a fresh id, the current timestamp and
    /// `done = false`; returns the created record.
    pub fn create_by_content(&mut self, content: &str) -> Todo {
        let todo = Todo::new(content);
        self.todos.push(todo.clone());
        todo
    }

    /// Flip `done` on the todo with the given id.
    pub fn toggle_done(&mut self, id: Uuid) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id: id.to_string() })?;
        todo.done = !todo.done;
        Ok(todo.clone())
    }

    /// Remove the todo with the given id and return it.
    pub fn delete_by_id(&mut self, id: Uuid) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id: id.to_string() })?;
        Ok(self.todos.remove(index))
    }
}
