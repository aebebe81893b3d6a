//! Expiry Sweeper Task
//!
//! Background task that periodically reclaims expired todo records.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::TodoStore;

/// Spawns a background task that sweeps expired records every `interval`.
///
/// The task only delegates to [`TodoStore::sweep`]; deciding what has expired
/// stays inside the store. It runs until the returned handle is aborted.
/// Aborting can only interrupt the task while it sleeps or waits for the
/// lock, never halfway through a sweep.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(TodoStore::new()));
/// let sweeper = spawn_sweeper(store.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper(store: Arc<RwLock<TodoStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweeper with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = store.write().await;
                guard.sweep()
            };

            if removed > 0 {
                info!(removed, "Sweeper reclaimed expired todos");
            } else {
                debug!("Sweeper found no expired todos");
            }
        }
    })
}
