//! Client for the todo HTTP API.
//!
//! # Overview
//! Layered the same way the UI side of the app is: a deterministic
//! build/parse core (`TodoApi`), a network repository (`TodoRepository`), a
//! validating controller (`TodoController`), and the `TodoFeed` view-model
//! that drives the terminal front-end.
//!
//! # Design
//! - `TodoApi` is stateless and I/O-free; the repository executes the
//!   round-trips with ureq.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.
//! - Errors are explicit `Result`s with an `ApiError` kind per failure
//!   class; the controller is where input validation happens.

pub mod client;
pub mod controller;
pub mod error;
pub mod feed;
pub mod http;
pub mod repository;
pub mod types;

pub use client::TodoApi;
pub use controller::{filter_todos_by_content, GetParams, TodoController};
pub use error::ApiError;
pub use feed::{FeedState, TodoFeed};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repository::TodoRepository;
pub use types::{CreateTodo, Todo, TodoPage};
