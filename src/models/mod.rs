//! Request and Response models for the todo server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateTodoRequest, JsonObject, UpdateTodoRequest, NO_JSON_DATA};
pub use responses::{
    DeleteResponse, EndpointInfo, ErrorResponse, HealthResponse, InfoResponse, StatsResponse,
    TodoListResponse, TodoMessageResponse, TodoResponse, TodoView, APPLICATION_NAME,
};
