//! In-memory todo HTTP API.
//!
//! # Overview
//! Serves the todo CRUD contract under `/api/todos`: paginated listing,
//! create, toggle-done, and delete-by-id, all against an in-memory store.
//!
//! # Design
//! - `TodoStore` is an explicitly owned value injected as router state, so
//!   tests build isolated apps instead of sharing a process-wide singleton.
//! - The store is behind a `RwLock`; requests may be served concurrently.
//! - Handlers in `routes` are the only place errors become status codes.

use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};

pub mod model;
pub mod routes;
pub mod store;

pub use model::{Todo, TodoEnvelope, TodoPage};
pub use store::{StoreError, TodoStore};

pub type Db = Arc<RwLock<TodoStore>>;

/// Router over a freshly seeded store (two todos, newest first).
pub fn app() -> Router {
    app_with_store(Arc::new(RwLock::new(TodoStore::seeded())))
}

/// Router over an injected store, for tests that need a known state.
pub fn app_with_store(db: Db) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(routes::list_todos).post(routes::create_todo),
        )
        .route("/api/todos/{id}", delete(routes::delete_todo))
        .route("/api/todos/{id}/toggle-done", put(routes::toggle_done))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
