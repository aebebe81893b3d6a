//! Store Statistics Module
//!
//! Point-in-time counts over the record table.

use serde::Serialize;

// == Store Stats ==
/// Counts taken at a single instant.
///
/// `completed` and `pending` only cover active records, so expired records
/// that have not been swept yet appear in `total` and `expired` but in
/// neither of those two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Records physically present, expired or not
    pub total: usize,
    /// Records whose deadline is still ahead
    pub active: usize,
    /// `total - active`
    pub expired: usize,
    /// Active records marked completed
    pub completed: usize,
    /// `active - completed`
    pub pending: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Derives the remaining counters from the three measured ones.
    pub fn from_counts(total: usize, active: usize, completed: usize) -> Self {
        Self {
            total,
            active,
            expired: total - active,
            completed,
            pending: active - completed,
        }
    }
}
