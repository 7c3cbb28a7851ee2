//! View-model for the todo feed.
//!
//! # Design
//! `TodoFeed` is the pure state machine behind the UI: it owns the loaded
//! list, the current page and search text, and performs no I/O. The driver
//! fetches pages through the controller and feeds the results back in.
//! Toggle and delete mutate the local list optimistically, without waiting
//! for the server; create waits for the server-assigned record before
//! prepending it. Failed requests are not rolled back here — the driver
//! surfaces them out-of-band.

use uuid::Uuid;

use crate::controller::filter_todos_by_content;
use crate::types::{Todo, TodoPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Initial state, and re-entered while a page fetch is in flight.
    Loading,
    Idle,
}

#[derive(Debug)]
pub struct TodoFeed {
    state: FeedState,
    todos: Vec<Todo>,
    page: usize,
    total_pages: usize,
    search: String,
}

impl Default for TodoFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Loading,
            todos: Vec::new(),
            page: 1,
            total_pages: 1,
            search: String::new(),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Loading
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// The load-more affordance is shown only while more pages exist.
    pub fn has_more_pages(&self) -> bool {
        self.page < self.total_pages
    }

    /// Apply the initial page: replace the list and record the page count.
    pub fn loaded(&mut self, page: TodoPage) {
        self.todos = page.todos;
        self.total_pages = page.pages;
        self.state = FeedState::Idle;
    }

    /// Advance to the next page if one exists; returns the page number to
    /// fetch. The caller passes the result to `appended`.
    pub fn next_page(&mut self) -> Option<usize> {
        if !self.has_more_pages() {
            return None;
        }
        self.page += 1;
        self.state = FeedState::Loading;
        Some(self.page)
    }

    /// Apply a load-more result: append, never replace.
    pub fn appended(&mut self, page: TodoPage) {
        self.todos.extend(page.todos);
        self.total_pages = page.pages;
        self.state = FeedState::Idle;
    }

    /// Prepend a server-confirmed record after a successful create.
    pub fn created(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Optimistically flip `done` on the local copy.
    pub fn toggled(&mut self, id: Uuid) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.done = !todo.done;
        }
    }

    /// Optimistically drop the local copy.
    pub fn removed(&mut self, id: Uuid) {
        self.todos.retain(|todo| todo.id != id);
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// The loaded list filtered by the current search text.
    pub fn visible(&self) -> Vec<Todo> {
        filter_todos_by_content(&self.todos, &self.search)
    }
}
