//! Response DTOs for the todo server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::{StoreStats, TodoRecord, RECORD_TTL_SECS};

/// Name reported by the health and info endpoints
pub const APPLICATION_NAME: &str = "ephemeral-todos";

/// A record as sent to clients, with the derived countdown.
#[derive(Debug, Clone, Serialize)]
pub struct TodoView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Whole seconds left, negative if expired but not yet swept
    pub time_remaining_seconds: i64,
}

impl TodoView {
    /// Renders a record as seen at `now`.
    pub fn new(record: TodoRecord, now: DateTime<Utc>) -> Self {
        let time_remaining_seconds = record.time_remaining_seconds(now);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            completed: record.completed,
            created_at: record.created_at,
            expires_at: record.expires_at,
            time_remaining_seconds,
        }
    }
}

/// Response body for GET /api/todos
#[derive(Debug, Clone, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoView>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

impl TodoListResponse {
    pub fn new(records: Vec<TodoRecord>, now: DateTime<Utc>) -> Self {
        let todos: Vec<TodoView> = records
            .into_iter()
            .map(|record| TodoView::new(record, now))
            .collect();
        Self {
            count: todos.len(),
            todos,
            timestamp: now,
        }
    }
}

/// Response body for GET /api/todos/:id
#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    pub todo: TodoView,
}

impl TodoResponse {
    pub fn new(record: TodoRecord, now: DateTime<Utc>) -> Self {
        Self {
            todo: TodoView::new(record, now),
        }
    }
}

/// Response body for create, update and toggle
#[derive(Debug, Clone, Serialize)]
pub struct TodoMessageResponse {
    /// Success message
    pub message: String,
    pub todo: TodoView,
}

impl TodoMessageResponse {
    pub fn created(record: TodoRecord, now: DateTime<Utc>) -> Self {
        Self::with_message("Todo created successfully", record, now)
    }

    pub fn updated(record: TodoRecord, now: DateTime<Utc>) -> Self {
        Self::with_message("Todo updated successfully", record, now)
    }

    /// Message reflects the flag after toggling.
    pub fn toggled(record: TodoRecord, now: DateTime<Utc>) -> Self {
        let state = if record.completed {
            "completed"
        } else {
            "incomplete"
        };
        Self::with_message(format!("Todo marked as {}", state), record, now)
    }

    fn with_message(message: impl Into<String>, record: TodoRecord, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            todo: TodoView::new(record, now),
        }
    }
}

/// Response body for DELETE /api/todos/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: u64,
}

impl DeleteResponse {
    pub fn new(id: u64) -> Self {
        Self {
            message: "Todo deleted successfully".to_string(),
            id,
        }
    }
}

/// Response body for GET /api/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_todos: usize,
    pub active_todos: usize,
    pub expired_todos: usize,
    pub completed_todos: usize,
    pub pending_todos: usize,
    pub expiration_time_seconds: i64,
    pub timestamp: DateTime<Utc>,
}

impl StatsResponse {
    pub fn new(stats: StoreStats, now: DateTime<Utc>) -> Self {
        Self {
            total_todos: stats.total,
            active_todos: stats.active,
            expired_todos: stats.expired,
            completed_todos: stats.completed,
            pending_todos: stats.pending,
            expiration_time_seconds: RECORD_TTL_SECS,
            timestamp: now,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    pub application: String,
    /// Records physically held, including expired ones awaiting the sweeper
    pub todos_in_memory: usize,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(todos_in_memory: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            application: APPLICATION_NAME.to_string(),
            todos_in_memory,
            timestamp: Utc::now(),
        }
    }
}

/// One row of the endpoint listing in GET /api/info
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub endpoint: &'static str,
    pub methods: Vec<&'static str>,
    pub path: &'static str,
}

/// Response body for GET /api/info
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub application: String,
    pub version: String,
    pub data_retention_seconds: i64,
    pub endpoints: Vec<EndpointInfo>,
}

impl InfoResponse {
    pub fn new(endpoints: Vec<EndpointInfo>) -> Self {
        Self {
            application: APPLICATION_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_retention_seconds: RECORD_TTL_SECS,
            endpoints,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
