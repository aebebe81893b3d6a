//! API Handlers
//!
//! HTTP request handlers for each todo server endpoint. Handlers hold no
//! state of their own: each one takes the store lock once, runs a single
//! store operation and shapes the result.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;

use crate::error::{Result, TodoError};
use crate::models::{
    CreateTodoRequest, DeleteResponse, HealthResponse, InfoResponse, JsonObject, StatsResponse,
    TodoListResponse, TodoMessageResponse, TodoResponse, UpdateTodoRequest,
};
use crate::store::TodoStore;

use super::routes::endpoint_catalog;

/// Static landing page served at `/`
const HOME_PAGE: &str = include_str!("home.html");

/// Application state shared across all handlers.
///
/// Contains the todo store wrapped in Arc<RwLock<>> for thread-safe access.
/// The same Arc is handed to the sweeper.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe todo store
    pub store: Arc<RwLock<TodoStore>>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}

/// Handler for GET /
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Handler for GET /api/todos
///
/// Lists active todos; expired ones are filtered out but not removed.
pub async fn list_todos_handler(State(state): State<AppState>) -> Json<TodoListResponse> {
    let now = Utc::now();
    let records = state.store.read().await.list_active_at(now);

    Json(TodoListResponse::new(records, now))
}

/// Handler for POST /api/todos
pub async fn create_todo_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JsonObject>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoMessageResponse>)> {
    let Json(body) = payload?;
    let req = CreateTodoRequest::from_body(body)?;
    if let Some(error_msg) = req.validate() {
        return Err(TodoError::InvalidInput(error_msg));
    }

    let now = Utc::now();
    let record = {
        let mut store = state.store.write().await;
        store.create_at(
            req.title.as_deref().unwrap_or_default(),
            req.description.as_deref().unwrap_or_default(),
            now,
        )?
    };

    Ok((
        StatusCode::CREATED,
        Json(TodoMessageResponse::created(record, now)),
    ))
}

/// Handler for GET /api/todos/:id
pub async fn get_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TodoResponse>> {
    let now = Utc::now();
    let record = state.store.read().await.get_at(id, now)?;

    Ok(Json(TodoResponse::new(record, now)))
}

/// Handler for PUT /api/todos/:id
///
/// Applies only the fields present in the body.
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<JsonObject>, JsonRejection>,
) -> Result<Json<TodoMessageResponse>> {
    let Json(body) = payload?;
    let req = UpdateTodoRequest::from_body(body)?;

    let now = Utc::now();
    let record = {
        let mut store = state.store.write().await;
        store.update_at(id, req.into_patch(), now)?
    };

    Ok(Json(TodoMessageResponse::updated(record, now)))
}

/// Handler for PATCH /api/todos/:id/toggle
pub async fn toggle_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TodoMessageResponse>> {
    let now = Utc::now();
    let record = state.store.write().await.toggle_at(id, now)?;

    Ok(Json(TodoMessageResponse::toggled(record, now)))
}

/// Handler for DELETE /api/todos/:id
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    let id = state.store.write().await.delete(id)?;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let now = Utc::now();
    let stats = state.store.read().await.stats_at(now);

    Json(StatsResponse::new(stats, now))
}

/// Handler for GET /health
///
/// Reports the physical record count, expired-but-unswept records included.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let todos_in_memory = state.store.read().await.len();

    Json(HealthResponse::healthy(todos_in_memory))
}

/// Handler for GET /api/info
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse::new(endpoint_catalog()))
}
