//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use ephemeral_todos::{create_router, store::RECORD_TTL_SECS, AppState};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (AppState, Router) {
    let state = AppState::default();
    let app = create_router(state.clone());
    (state, app)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

/// Inserts a record whose deadline has already passed.
async fn insert_expired(state: &AppState, title: &str) -> u64 {
    let past = Utc::now() - Duration::seconds(RECORD_TTL_SECS + 10);
    state
        .store
        .write()
        .await
        .create_at(title, "", past)
        .unwrap()
        .id
}

// == CREATE Endpoint Tests ==

#[tokio::test]
async fn test_create_endpoint_success() {
    let (_, app) = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/todos",
        Some(r#"{"title":"  Buy milk  ","description":" 2 litres "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Todo created successfully");
    assert_eq!(json["todo"]["id"], 1);
    assert_eq!(json["todo"]["title"], "Buy milk");
    assert_eq!(json["todo"]["description"], "2 litres");
    assert_eq!(json["todo"]["completed"], false);

    let remaining = json["todo"]["time_remaining_seconds"].as_i64().unwrap();
    assert!((298..=300).contains(&remaining));
}

#[tokio::test]
async fn test_create_endpoint_blank_title() {
    let (state, app) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/todos", Some(r#"{"title":"   "}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Title is required");
    assert!(state.store.read().await.is_empty());
}

#[tokio::test]
async fn test_create_endpoint_missing_title() {
    let (_, app) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/todos", Some(r#"{"description":"x"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Title is required");
}

#[tokio::test]
async fn test_create_endpoint_invalid_json() {
    let (_, app) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/todos", Some(r#"{"invalid json"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_create_endpoint_without_body() {
    let (_, app) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/todos", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_create_endpoint_empty_object() {
    let (state, app) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/todos", Some("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No JSON data provided");
    assert!(state.store.read().await.is_empty());
}

// == LIST Endpoint Tests ==

#[tokio::test]
async fn test_list_endpoint_hides_expired() {
    let (state, app) = create_test_app();
    insert_expired(&state, "stale").await;
    send(&app, "POST", "/api/todos", Some(r#"{"title":"first"}"#)).await;
    send(&app, "POST", "/api/todos", Some(r#"{"title":"second"}"#)).await;

    let (status, json) = send(&app, "GET", "/api/todos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["todos"][0]["title"], "first");
    assert_eq!(json["todos"][1]["title"], "second");
    assert!(json["timestamp"].is_string());

    // Listing does not evict.
    assert_eq!(state.store.read().await.len(), 3);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"read me"}"#)).await;

    let (status, json) = send(&app, "GET", "/api/todos/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["todo"]["title"], "read me");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let (_, app) = create_test_app();

    let (status, json) = send(&app, "GET", "/api/todos/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Todo not found");
}

#[tokio::test]
async fn test_get_endpoint_expired() {
    let (state, app) = create_test_app();
    let id = insert_expired(&state, "stale").await;

    let (status, json) = send(&app, "GET", &format!("/api/todos/{}", id), None).await;

    assert_eq!(status, StatusCode::GONE);
    assert_eq!(json["error"], "Todo has expired");
}

// == UPDATE Endpoint Tests ==

#[tokio::test]
async fn test_update_endpoint_partial() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"A","description":"B"}"#)).await;

    let (status, json) = send(&app, "PUT", "/api/todos/1", Some(r#"{"completed":true}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Todo updated successfully");
    assert_eq!(json["todo"]["title"], "A");
    assert_eq!(json["todo"]["description"], "B");
    assert_eq!(json["todo"]["completed"], true);
}

#[tokio::test]
async fn test_update_endpoint_ignores_non_boolean_completed() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"A"}"#)).await;

    let (status, json) = send(
        &app,
        "PUT",
        "/api/todos/1",
        Some(r#"{"title":" renamed ","completed":"yes"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["todo"]["title"], "renamed");
    assert_eq!(json["todo"]["completed"], false);
}

#[tokio::test]
async fn test_update_endpoint_empty_body() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"A"}"#)).await;

    let (status, json) = send(&app, "PUT", "/api/todos/1", Some("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_update_endpoint_body_without_known_fields() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"A","description":"B"}"#)).await;

    for body in [r#"{"foo":1}"#, r#"{"title":null}"#, r#"{"completed":null}"#] {
        let (status, json) = send(&app, "PUT", "/api/todos/1", Some(body)).await;

        assert_eq!(status, StatusCode::OK, "body {}", body);
        assert_eq!(json["todo"]["title"], "A");
        assert_eq!(json["todo"]["description"], "B");
        assert_eq!(json["todo"]["completed"], false);
    }
}

#[tokio::test]
async fn test_update_endpoint_non_object_body() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"A"}"#)).await;

    let (status, json) = send(&app, "PUT", "/api/todos/1", Some("[1, 2]")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No JSON data provided");
}

#[tokio::test]
async fn test_update_endpoint_not_found_and_expired() {
    let (state, app) = create_test_app();
    let id = insert_expired(&state, "stale").await;

    let (status, _) = send(&app, "PUT", "/api/todos/77", Some(r#"{"title":"x"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/todos/{}", id),
        Some(r#"{"title":"x"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::GONE);
}

// == TOGGLE Endpoint Tests ==

#[tokio::test]
async fn test_toggle_endpoint() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"flip"}"#)).await;

    let (status, json) = send(&app, "PATCH", "/api/todos/1/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Todo marked as completed");
    assert_eq!(json["todo"]["completed"], true);

    let (_, json) = send(&app, "PATCH", "/api/todos/1/toggle", None).await;
    assert_eq!(json["message"], "Todo marked as incomplete");
    assert_eq!(json["todo"]["completed"], false);
}

#[tokio::test]
async fn test_toggle_endpoint_expired() {
    let (state, app) = create_test_app();
    let id = insert_expired(&state, "stale").await;

    let (status, _) = send(&app, "PATCH", &format!("/api/todos/{}/toggle", id), None).await;

    assert_eq!(status, StatusCode::GONE);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let (_, app) = create_test_app();
    send(&app, "POST", "/api/todos", Some(r#"{"title":"bye"}"#)).await;

    let (status, json) = send(&app, "DELETE", "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["message"], "Todo deleted successfully");

    let (status, _) = send(&app, "GET", "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_expired_then_swept() {
    let (state, app) = create_test_app();
    let unswept = insert_expired(&state, "unswept").await;
    let swept = insert_expired(&state, "swept").await;

    let (status, _) = send(&app, "DELETE", &format!("/api/todos/{}", unswept), None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(state.store.write().await.sweep(), 1);

    let (status, json) = send(&app, "DELETE", &format!("/api/todos/{}", swept), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Todo not found");
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (state, app) = create_test_app();
    insert_expired(&state, "stale").await;
    send(&app, "POST", "/api/todos", Some(r#"{"title":"done"}"#)).await;
    send(&app, "POST", "/api/todos", Some(r#"{"title":"open"}"#)).await;
    send(&app, "PATCH", "/api/todos/2/toggle", None).await;

    let (status, json) = send(&app, "GET", "/api/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_todos"], 3);
    assert_eq!(json["active_todos"], 2);
    assert_eq!(json["expired_todos"], 1);
    assert_eq!(json["completed_todos"], 1);
    assert_eq!(json["pending_todos"], 1);
    assert_eq!(json["expiration_time_seconds"], 300);
    assert!(json["timestamp"].is_string());
}

// == HEALTH and INFO Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint_counts_unswept() {
    let (state, app) = create_test_app();
    insert_expired(&state, "stale").await;

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["todos_in_memory"], 1);
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_info_endpoint() {
    let (_, app) = create_test_app();

    let (status, json) = send(&app, "GET", "/api/info", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data_retention_seconds"], 300);
    let endpoints = json["endpoints"].as_array().unwrap();
    assert!(endpoints
        .iter()
        .any(|e| e["path"] == "/api/todos" && e["methods"][0] == "POST"));
}
