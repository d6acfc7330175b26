//! End-to-end tests for the todo API.
//!
//! Each test drives the full router over an in-memory store, asserting the
//! exact wire behavior of the five operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum_test::TestServer;
use serde_json::{json, Value};
use taskpad_web::{app, AppState, ServerConfig};

fn server() -> TestServer {
    let router = app(AppState::in_memory(), &ServerConfig::default());
    TestServer::new(router).expect("router should build")
}

async fn create(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/todos").json(&body).await;
    assert_eq!(response.status_code(), 200);
    response.json::<Value>()
}

fn id_of(todo: &Value) -> &str {
    todo.get("_id").and_then(Value::as_str).expect("_id present")
}

#[tokio::test]
async fn health_is_ok() {
    let server = server();
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn list_starts_empty() {
    let server = server();
    let response = server.get("/api/todos").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Vec<Value>>(), Vec::<Value>::new());
}

#[tokio::test]
async fn create_with_missing_title_is_rejected_and_not_persisted() {
    let server = server();

    let response = server.post("/api/todos").json(&json!({})).await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    let errors = body.get("errors").and_then(Value::as_array).unwrap();
    assert_eq!(errors[0]["field"], "title");
    assert_eq!(errors[0]["msg"], "Title is required");

    let response = server
        .post("/api/todos")
        .json(&json!({"title": "   "}))
        .await;
    assert_eq!(response.status_code(), 400);

    // nothing was persisted
    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_forces_status_to_pending() {
    let server = server();
    let todo = create(
        &server,
        json!({"title": "Buy milk", "status": "done"}),
    )
    .await;
    assert_eq!(todo["status"], "pending");
}

#[tokio::test]
async fn create_applies_defaults() {
    let server = server();
    let todo = create(&server, json!({"title": "Buy milk"})).await;

    assert_eq!(todo["priority"], "medium");
    assert_eq!(todo["status"], "pending");
    assert!(todo.get("description").is_none());
    assert!(todo.get("user").is_none());
    assert!(todo.get("date").is_some());
}

#[tokio::test]
async fn create_round_trips_through_list() {
    let server = server();
    let created = create(
        &server,
        json!({
            "title": "Write report",
            "description": "quarterly numbers",
            "priority": "high",
            "user": "abc123",
        }),
    )
    .await;

    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    let fetched = &listed[0];

    assert_eq!(fetched["_id"], created["_id"]);
    assert_eq!(fetched["title"], "Write report");
    assert_eq!(fetched["description"], "quarterly numbers");
    assert_eq!(fetched["priority"], "high");
    assert_eq!(fetched["status"], "pending");
    assert_eq!(fetched["user"], "abc123");
    assert_eq!(fetched["date"], created["date"]);
}

#[tokio::test]
async fn list_orders_newest_first() {
    let server = server();
    let a = create(&server, json!({"title": "A"})).await;
    let b = create(&server, json!({"title": "B"})).await;
    let c = create(&server, json!({"title": "C"})).await;

    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    let ids: Vec<&str> = listed.iter().map(id_of).collect();
    assert_eq!(ids, vec![id_of(&c), id_of(&b), id_of(&a)]);
}

#[tokio::test]
async fn update_on_missing_id_returns_404_and_changes_nothing() {
    let server = server();
    create(&server, json!({"title": "Keep me"})).await;

    let response = server
        .put("/api/todos/00000000-0000-0000-0000-000000000000")
        .json(&json!({"title": "New title"}))
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["msg"], "Todo not found");

    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"], "Keep me");
}

#[tokio::test]
async fn update_applies_only_present_fields() {
    let server = server();
    let created = create(
        &server,
        json!({"title": "Buy milk", "description": "2 liters"}),
    )
    .await;
    let id = id_of(&created);

    let response = server
        .put(&format!("/api/todos/{id}"))
        .json(&json!({"priority": "high"}))
        .await;
    assert_eq!(response.status_code(), 200);
    let updated = response.json::<Value>();

    assert_eq!(updated["title"], "Buy milk");
    assert_eq!(updated["description"], "2 liters");
    assert_eq!(updated["status"], "pending");
    assert_eq!(updated["priority"], "high");
    assert_eq!(updated["date"], created["date"]);
}

#[tokio::test]
async fn update_with_blank_title_is_rejected() {
    let server = server();
    let created = create(&server, json!({"title": "Buy milk"})).await;
    let id = id_of(&created);

    let response = server
        .put(&format!("/api/todos/{id}"))
        .json(&json!({"title": ""}))
        .await;
    assert_eq!(response.status_code(), 400);

    // title unchanged
    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert_eq!(listed[0]["title"], "Buy milk");
}

#[tokio::test]
async fn update_can_clear_description() {
    let server = server();
    let created = create(
        &server,
        json!({"title": "Buy milk", "description": "2 liters"}),
    )
    .await;
    let id = id_of(&created);

    let response = server
        .put(&format!("/api/todos/{id}"))
        .json(&json!({"description": ""}))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["description"], "");
}

#[tokio::test]
async fn toggle_flips_and_flips_back() {
    let server = server();
    let created = create(&server, json!({"title": "Buy milk"})).await;
    let id = id_of(&created);

    let response = server.put(&format!("/api/todos/{id}/toggle")).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["status"], "done");

    let response = server.put(&format!("/api/todos/{id}/toggle")).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["status"], "pending");
}

#[tokio::test]
async fn toggle_on_missing_id_returns_404() {
    let server = server();
    let response = server
        .put("/api/todos/00000000-0000-0000-0000-000000000000/toggle")
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["msg"], "Todo not found");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let server = server();
    let created = create(&server, json!({"title": "Buy milk"})).await;
    let id = id_of(&created);

    let response = server.delete(&format!("/api/todos/{id}")).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["msg"], "Todo removed");

    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn delete_on_missing_id_returns_404() {
    let server = server();
    let response = server
        .delete("/api/todos/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["msg"], "Todo not found");
}

#[tokio::test]
async fn duplicate_titles_are_permitted() {
    let server = server();
    create(&server, json!({"title": "Same"})).await;
    create(&server, json!({"title": "Same"})).await;

    let listed = server.get("/api/todos").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 2);
}
