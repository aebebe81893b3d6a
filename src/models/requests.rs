//! Request DTOs for the todo server API
//!
//! Defines the structure of incoming HTTP request bodies.
//!
//! Handlers extract bodies as a raw JSON object first so that an empty object
//! can be told apart from an object that merely lacks the known fields.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, TodoError};
use crate::store::TodoPatch;

/// Message for a missing, malformed or empty body
pub const NO_JSON_DATA: &str = "No JSON data provided";

/// Raw JSON object as received from the client
pub type JsonObject = Map<String, Value>;

/// Rejects an empty object, then reads the known fields out of it.
///
/// Unknown keys are ignored; a known key with the wrong type makes the body
/// malformed.
fn parse_object<T: DeserializeOwned>(body: JsonObject) -> Result<T> {
    if body.is_empty() {
        return Err(TodoError::InvalidInput(NO_JSON_DATA.to_string()));
    }
    serde_json::from_value(Value::Object(body))
        .map_err(|_| TodoError::InvalidInput(NO_JSON_DATA.to_string()))
}

/// Request body for POST /api/todos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    /// Required; rejected when blank
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Reads a create request from a raw JSON object.
    pub fn from_body(body: JsonObject) -> Result<Self> {
        parse_object(body)
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => None,
            _ => Some("Title is required".to_string()),
        }
    }
}

/// Request body for PUT /api/todos/:id
///
/// `completed` is kept as a raw JSON value so that a non-boolean value is
/// ignored rather than failing the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<Value>,
}

impl UpdateTodoRequest {
    /// Reads an update request from a raw JSON object.
    ///
    /// Any non-empty object is accepted, even one that changes nothing.
    pub fn from_body(body: JsonObject) -> Result<Self> {
        parse_object(body)
    }

    /// Converts the request into a store patch.
    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            title: self.title,
            description: self.description,
            completed: self.completed.as_ref().and_then(Value::as_bool),
        }
    }
}
