//! Store Module
//!
//! Provides the in-memory todo table with a fixed per-record TTL, read-time
//! expiry checks and an explicit sweep.

mod record;
mod stats;
#[allow(clippy::module_inception)]
mod store;


// Re-export public types
pub use record::TodoRecord;
pub use stats::StoreStats;
pub use store::{TodoPatch, TodoStore};

// == Public Constants ==
/// Lifetime of every record in seconds (5 minutes)
pub const RECORD_TTL_SECS: i64 = 300;

/// Interval between sweeper passes in seconds
pub const SWEEP_INTERVAL_SECS: u64 = 30;
