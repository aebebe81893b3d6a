//! Error types for the todo server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::models::{ErrorResponse, NO_JSON_DATA};

// == Todo Error Enum ==
/// Unified error type for the todo server.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Missing or blank title, or a malformed request body
    #[error("{0}")]
    InvalidInput(String),

    /// No record with this id exists (never created, deleted or swept)
    #[error("Todo not found")]
    NotFound(u64),

    /// The record is still stored but its deadline has passed
    #[error("Todo has expired")]
    Expired(u64),
}

// == IntoResponse Implementation ==
impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match &self {
            TodoError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::Expired(_) => StatusCode::GONE,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Body Rejections ==
/// Any body the JSON extractor cannot use counts as "no JSON data".
impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(reason = %rejection.body_text(), "rejected request body");
        TodoError::InvalidInput(NO_JSON_DATA.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the todo server.
pub type Result<T> = std::result::Result<T, TodoError>;
