//! Request handlers: parameter validation, store delegation, and mapping of
//! results to HTTP status codes and JSON bodies.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::model::TodoEnvelope;
use crate::store::StoreError;
use crate::Db;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 5;

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Read an optional pagination parameter; present values must parse as
/// positive integers.
fn positive_param(params: &HashMap<String, String>, key: &str) -> Result<Option<usize>, String> {
    match params.get(key) {
        None => Ok(None),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(format!("{key} must be a positive integer")),
        },
    }
}

pub async fn list_todos(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page = match positive_param(&params, "page") {
        Ok(page) => page.unwrap_or(DEFAULT_PAGE),
        Err(message) => return bad_request(&message),
    };
    let limit = match positive_param(&params, "limit") {
        Ok(limit) => limit.unwrap_or(DEFAULT_LIMIT),
        Err(message) => return bad_request(&message),
    };

    let todos = db.read().await;
    (StatusCode::OK, Json(todos.page(page, limit))).into_response()
}

pub async fn create_todo(State(db): State<Db>, Json(body): Json<Value>) -> Response {
    let Some(content) = body.get("content").and_then(Value::as_str) else {
        return bad_request("content must be a string");
    };

    let todo = db.write().await.create_by_content(content);
    (StatusCode::CREATED, Json(TodoEnvelope { todo })).into_response()
}

pub async fn toggle_done(State(db): State<Db>, Path(id): Path<String>) -> Response {
    // An id that is not even a uuid cannot match any stored todo.
    let Ok(id) = Uuid::parse_str(&id) else {
        return StoreError::NotFound { id }.into_response();
    };

    match db.write().await.toggle_done(id) {
        Ok(todo) => (StatusCode::OK, Json(TodoEnvelope { todo })).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return bad_request("id must be a valid UUID");
    };

    match db.write().await.delete_by_id(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
