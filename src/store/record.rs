//! Todo Record Module
//!
//! Defines a single todo record and its fixed expiration deadline.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

// == Todo Record ==
/// One task entry held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRecord {
    /// Identifier assigned by the store, never reused
    pub id: u64,
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed description, may be empty
    pub description: String,
    /// Completion flag
    pub completed: bool,
    /// Creation instant
    pub created_at: DateTime<Utc>,
    /// Deadline, set once at creation
    pub expires_at: DateTime<Utc>,
}

impl TodoRecord {
    // == Constructor ==
    /// Creates a record stamped at `now` that expires `ttl` later.
    ///
    /// Callers are expected to have trimmed and validated the text fields.
    pub fn new(
        id: u64,
        title: String,
        description: String,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the record has expired as of `now`.
    ///
    /// Boundary condition: a record whose deadline equals `now` is already
    /// expired, so active and expired never overlap.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Inverse of [`TodoRecord::is_expired_at`].
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now)
    }

    // == Time Remaining ==
    /// Whole seconds left before the deadline, rounded down.
    ///
    /// Negative once the deadline has passed and the record is still waiting
    /// for the sweeper.
    pub fn time_remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_milliseconds().div_euclid(1000)
    }
}
