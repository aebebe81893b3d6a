//! API Routes
//!
//! Configures the Axum router with all todo server endpoints.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::models::EndpointInfo;

use super::handlers::{
    create_todo_handler, delete_todo_handler, get_todo_handler, health_handler, home_handler,
    info_handler, list_todos_handler, stats_handler, toggle_todo_handler, update_todo_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Static home page
/// - `GET /api/todos` - List active todos
/// - `POST /api/todos` - Create a todo
/// - `GET /api/todos/:id` - Fetch one todo
/// - `PUT /api/todos/:id` - Partially update a todo
/// - `DELETE /api/todos/:id` - Delete a todo
/// - `PATCH /api/todos/:id/toggle` - Flip the completed flag
/// - `GET /api/stats` - Store statistics
/// - `GET /api/info` - Endpoint listing
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route("/api/todos", get(list_todos_handler).post(create_todo_handler))
        .route(
            "/api/todos/:id",
            get(get_todo_handler)
                .put(update_todo_handler)
                .delete(delete_todo_handler),
        )
        .route("/api/todos/:id/toggle", patch(toggle_todo_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/info", get(info_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Describes the routes registered by [`create_router`].
pub fn endpoint_catalog() -> Vec<EndpointInfo> {
    let entry = |endpoint, methods: &[&'static str], path| EndpointInfo {
        endpoint,
        methods: methods.to_vec(),
        path,
    };

    vec![
        entry("home", &["GET"], "/"),
        entry("list_todos", &["GET"], "/api/todos"),
        entry("create_todo", &["POST"], "/api/todos"),
        entry("get_todo", &["GET"], "/api/todos/:id"),
        entry("update_todo", &["PUT"], "/api/todos/:id"),
        entry("delete_todo", &["DELETE"], "/api/todos/:id"),
        entry("toggle_todo", &["PATCH"], "/api/todos/:id/toggle"),
        entry("stats", &["GET"], "/api/stats"),
        entry("info", &["GET"], "/api/info"),
        entry("health", &["GET"], "/health"),
    ]
}
