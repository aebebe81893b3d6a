//! API Module
//!
//! HTTP handlers and routing for the todo server REST API.
//!
//! # Endpoints
//! - `GET /` - Static home page
//! - `GET|POST /api/todos` - List active todos / create one
//! - `GET|PUT|DELETE /api/todos/:id` - Fetch, update or delete one todo
//! - `PATCH /api/todos/:id/toggle` - Flip the completed flag
//! - `GET /api/stats` - Store statistics
//! - `GET /api/info` - Endpoint listing
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, endpoint_catalog};
