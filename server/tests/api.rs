use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use tokio::sync::RwLock;
use tower::ServiceExt;
use todo_server::{app, app_with_store, Todo, TodoEnvelope, TodoPage, TodoStore};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_returns_seeds_newest_first() {
    let resp = app().oneshot(get_request("/api/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TodoPage = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 1);
    assert_eq!(page.todos[0].content, "Todo 2");
    assert_eq!(page.todos[1].content, "Todo 1");
}

#[tokio::test]
async fn list_todos_empty_store() {
    let db = Arc::new(RwLock::new(TodoStore::new()));
    let resp = app_with_store(db)
        .oneshot(get_request("/api/todos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TodoPage = body_json(resp).await;
    assert!(page.todos.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.pages, 0);
}

#[tokio::test]
async fn list_todos_honors_page_and_limit() {
    let resp = app()
        .oneshot(get_request("/api/todos?page=1&limit=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TodoPage = body_json(resp).await;
    assert_eq!(page.todos.len(), 1);
    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 2);
    assert_eq!(page.todos[0].content, "Todo 2");
}

#[tokio::test]
async fn list_todos_page_past_the_end_is_empty() {
    let resp = app()
        .oneshot(get_request("/api/todos?page=9&limit=5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: TodoPage = body_json(resp).await;
    assert!(page.todos.is_empty());
    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 1);
}

#[tokio::test]
async fn list_todos_non_numeric_page_returns_400() {
    let resp = app()
        .oneshot(get_request("/api/todos?page=abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn list_todos_zero_limit_returns_400() {
    let resp = app()
        .oneshot(get_request("/api/todos?limit=0"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_envelope() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"content":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TodoEnvelope = body_json(resp).await;
    assert_eq!(created.todo.content, "Buy milk");
    assert!(!created.todo.done);
}

#[tokio::test]
async fn create_todo_non_string_content_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{"content":42}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_todo_missing_content_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", r#"{}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- toggle ---

#[tokio::test]
async fn toggle_done_unknown_id_returns_404() {
    let resp = app()
        .oneshot(empty_request(
            "PUT",
            "/api/todos/00000000-0000-0000-0000-000000000000/toggle-done",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body["error"],
        "Todo id: 00000000-0000-0000-0000-000000000000 not found"
    );
}

#[tokio::test]
async fn toggle_done_bad_uuid_returns_404() {
    let resp = app()
        .oneshot(empty_request("PUT", "/api/todos/not-a-uuid/toggle-done"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_unknown_id_returns_404() {
    let resp = app()
        .oneshot(empty_request(
            "DELETE",
            "/api/todos/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/todos/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/todos", r#"{"content":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TodoEnvelope = body_json(resp).await;
    let id = created.todo.id;

    // list — the new todo is appended after the two seeds
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/todos?limit=5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: TodoPage = body_json(resp).await;
    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 1);
    assert_eq!(page.todos.last().unwrap().id, id);
    let ids: Vec<_> = page.todos.iter().map(|todo| todo.id).collect();
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    // toggle — done flips to true
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("PUT", &format!("/api/todos/{id}/toggle-done")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let toggled: TodoEnvelope = body_json(resp).await;
    assert!(toggled.todo.done);
    assert_eq!(toggled.todo.content, "Walk dog");

    // toggle again — back to false
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("PUT", &format!("/api/todos/{id}/toggle-done")))
        .await
        .unwrap();
    let toggled: TodoEnvelope = body_json(resp).await;
    assert!(!toggled.todo.done);

    // delete — 204 with empty body
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list — back to the two seeds
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/todos"))
        .await
        .unwrap();
    let page: TodoPage = body_json(resp).await;
    assert_eq!(page.total, 2);
    assert!(page.todos.iter().all(|todo: &Todo| todo.id != id));
}
