//! Todo Store Module
//!
//! The expiring record table: id allocation, read-time expiry checks and the
//! sweep that physically removes expired records.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::store::{StoreStats, TodoRecord, RECORD_TTL_SECS};

// == Todo Patch ==
/// Partial update applied by [`TodoStore::update`].
///
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

// == Todo Store ==
/// In-memory record table with a single store-wide TTL.
///
/// Not synchronized on its own; the server shares it as
/// `Arc<RwLock<TodoStore>>` and runs each operation under one lock guard.
///
/// Every operation has an `*_at` variant taking the evaluation instant. The
/// plain variants evaluate at `Utc::now()`.
#[derive(Debug)]
pub struct TodoStore {
    /// Records keyed by id; ids grow with insertion so iteration is in
    /// creation order
    records: BTreeMap<u64, TodoRecord>,
    /// Last id handed out
    last_id: u64,
    /// Lifetime of every record
    ttl: Duration,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    // == Constructor ==
    /// Creates an empty store whose records live for [`RECORD_TTL_SECS`].
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            last_id: 0,
            ttl: Duration::seconds(RECORD_TTL_SECS),
        }
    }

    // == Create ==
    /// Stores a new record and returns a copy of it.
    ///
    /// Fails with `InvalidInput` if the title is blank after trimming.
    pub fn create(&mut self, title: &str, description: &str) -> Result<TodoRecord> {
        self.create_at(title, description, Utc::now())
    }

    pub fn create_at(
        &mut self,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<TodoRecord> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::InvalidInput("Title is required".to_string()));
        }

        self.last_id += 1;
        let record = TodoRecord::new(
            self.last_id,
            title.to_string(),
            description.trim().to_string(),
            now,
            self.ttl,
        );
        self.records.insert(record.id, record.clone());

        debug!(id = record.id, expires_at = %record.expires_at, "created todo");
        Ok(record)
    }

    // == List Active ==
    /// Returns every active record in creation order.
    ///
    /// Expired records are skipped but left in place for the sweeper.
    pub fn list_active(&self) -> Vec<TodoRecord> {
        self.list_active_at(Utc::now())
    }

    pub fn list_active_at(&self, now: DateTime<Utc>) -> Vec<TodoRecord> {
        self.records
            .values()
            .filter(|record| record.is_active_at(now))
            .cloned()
            .collect()
    }

    // == Get ==
    /// Returns a copy of an active record.
    pub fn get(&self, id: u64) -> Result<TodoRecord> {
        self.get_at(id, Utc::now())
    }

    pub fn get_at(&self, id: u64, now: DateTime<Utc>) -> Result<TodoRecord> {
        self.active_record(id, now).cloned()
    }

    // == Update ==
    /// Applies a partial update to an active record.
    ///
    /// A title that is blank after trimming is ignored; a description is
    /// always replaced by its trimmed value. The deadline never moves.
    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<TodoRecord> {
        self.update_at(id, patch, Utc::now())
    }

    pub fn update_at(
        &mut self,
        id: u64,
        patch: TodoPatch,
        now: DateTime<Utc>,
    ) -> Result<TodoRecord> {
        let record = self.active_record_mut(id, now)?;

        if let Some(title) = patch.title {
            let title = title.trim();
            if !title.is_empty() {
                record.title = title.to_string();
            }
        }
        if let Some(description) = patch.description {
            record.description = description.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            record.completed = completed;
        }

        Ok(record.clone())
    }

    // == Toggle ==
    /// Flips the completion flag of an active record.
    pub fn toggle(&mut self, id: u64) -> Result<TodoRecord> {
        self.toggle_at(id, Utc::now())
    }

    pub fn toggle_at(&mut self, id: u64, now: DateTime<Utc>) -> Result<TodoRecord> {
        let record = self.active_record_mut(id, now)?;
        record.completed = !record.completed;
        Ok(record.clone())
    }

    // == Delete ==
    /// Removes a record by id and returns that id.
    ///
    /// Only existence is checked: an expired record that the sweeper has not
    /// reached yet can still be deleted.
    pub fn delete(&mut self, id: u64) -> Result<u64> {
        match self.records.remove(&id) {
            Some(_) => {
                debug!(id, "deleted todo");
                Ok(id)
            }
            None => Err(TodoError::NotFound(id)),
        }
    }

    // == Stats ==
    /// Counts records as of now.
    pub fn stats(&self) -> StoreStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> StoreStats {
        let (active, completed) = self
            .records
            .values()
            .filter(|record| record.is_active_at(now))
            .fold((0, 0), |(active, completed), record| {
                (active + 1, completed + usize::from(record.completed))
            });

        StoreStats::from_counts(self.records.len(), active, completed)
    }

    // == Sweep ==
    /// Removes every record expired as of now.
    ///
    /// Returns the number of records removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(Utc::now())
    }

    pub fn sweep_at(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| record.is_active_at(now));
        before - self.records.len()
    }

    // == Length ==
    /// Returns the number of records physically stored, expired ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // == Active Record Guards ==
    fn active_record(&self, id: u64, now: DateTime<Utc>) -> Result<&TodoRecord> {
        let record = self.records.get(&id).ok_or(TodoError::NotFound(id))?;
        if record.is_expired_at(now) {
            return Err(TodoError::Expired(id));
        }
        Ok(record)
    }

    fn active_record_mut(&mut self, id: u64, now: DateTime<Utc>) -> Result<&mut TodoRecord> {
        let record = self.records.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        if record.is_expired_at(now) {
            return Err(TodoError::Expired(id));
        }
        Ok(record)
    }
}
