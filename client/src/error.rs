//! Error types for the todo client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the todo
//! does not exist" from other server failures. Both server-side variants
//! carry the message the server put in its `{"error": ...}` body.

use std::fmt;

/// Errors returned by the client layers.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the referenced todo does not exist.
    NotFound { message: String },

    /// The server returned an unexpected status other than 404.
    Http { status: u16, message: String },

    /// The response body did not match the expected shape.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// Input rejected before any request was issued.
    Validation(String),

    /// The HTTP round-trip itself failed.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { message } if message.is_empty() => {
                write!(f, "todo not found")
            }
            ApiError::NotFound { message } => write!(f, "{message}"),
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
