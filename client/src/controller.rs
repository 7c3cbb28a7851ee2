//! UI-facing controller: default pagination, input validation, and the
//! content filter the UI applies to the loaded list.

use uuid::Uuid;

use crate::error::ApiError;
use crate::repository::TodoRepository;
use crate::types::{Todo, TodoPage};

/// The UI requests three records per page unless told otherwise.
const DEFAULT_LIMIT: usize = 3;
const DEFAULT_PAGE: usize = 1;

/// Pagination parameters for `TodoController::get`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Thin validation layer over `TodoRepository`.
pub struct TodoController {
    repository: TodoRepository,
}

impl TodoController {
    pub fn new(base_url: &str) -> Self {
        Self {
            repository: TodoRepository::new(base_url),
        }
    }

    pub fn get(&self, params: GetParams) -> Result<TodoPage, ApiError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        self.repository.get(Some(page), Some(limit))
    }

    pub fn create(&self, content: &str) -> Result<Todo, ApiError> {
        if content.is_empty() {
            return Err(ApiError::Validation("content must not be empty".to_string()));
        }
        self.repository.create_by_content(content)
    }

    pub fn toggle_done(&self, id: &str) -> Result<Todo, ApiError> {
        self.repository.toggle_done(parse_id(id)?)
    }

    pub fn delete_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.repository.delete_by_id(parse_id(id)?)
    }
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    if id.is_empty() {
        return Err(ApiError::Validation("id must not be empty".to_string()));
    }
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("id must be a valid UUID".to_string()))
}

/// Case-insensitive substring filter over `content`. Pure: returns a new
/// sequence preserving the original relative order; an empty search keeps
/// every record.
pub fn filter_todos_by_content(todos: &[Todo], search: &str) -> Vec<Todo> {
    let search = search.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.content.to_lowercase().contains(&search))
        .cloned()
        .collect()
}
