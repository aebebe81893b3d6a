//! Ephemeral Todos - An in-memory todo server
//!
//! Every todo record expires five minutes after creation. Expired records are
//! hidden at read time and reclaimed by a periodic background sweep.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, TodoError};
pub use store::{StoreStats, TodoPatch, TodoRecord, TodoStore};
pub use tasks::spawn_sweeper;
