//! The plan store: authoritative owner of the plan collection.
//!
//! [`PlanStore`] holds the in-memory collection, mediates every mutation
//! through its operation API, and keeps the durable snapshot converging with
//! memory after each operation. The in-memory collection is the source of
//! truth; persistence is write-behind.
//!
//! # Mutation protocol
//!
//! Every toggle/log operation follows the same steps:
//!
//! 1. Locate the plan by id; an unknown id is a silent no-op, because the
//!    plan may have been deleted while the triggering event was in flight.
//! 2. Apply the pure state transition to a clone of the plan, so observers
//!    compare fresh values rather than shared mutations.
//! 3. Append the activity entry, trim the log, bump `last_activity_at`, and
//!    re-derive `overall_progress`.
//! 4. Replace the plan in the collection and release the lock. There is no
//!    await between locating the plan and committing it, so mutations never
//!    interleave their read and write phases.
//! 5. Broadcast the new collection to observers and schedule the durable
//!    write. Writes chain in commit order, so the last durable snapshot
//!    always reflects the last commit; a failed write is reported through
//!    [`PlanStore::persistence_failures`] and never rolls memory back.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::{self, JoinHandle};

use crate::db::Database;
use crate::error::StoreError;
use crate::gen::PlanGenerator;
use crate::models::{Plan, PlanSummary};

pub mod builder;
pub mod generation;
pub mod mutations;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::StoreBuilder;

/// Owner of the plan collection and mediator of all mutations.
pub struct PlanStore {
    db_path: PathBuf,
    generator: Option<Arc<dyn PlanGenerator>>,
    plans: Mutex<Vec<Plan>>,
    changes: watch::Sender<Vec<Plan>>,
    persist_failures: watch::Sender<Option<String>>,
    last_write: Mutex<Option<JoinHandle<()>>>,
}

impl PlanStore {
    /// Creates a store over an already-loaded collection.
    pub(crate) fn new(
        db_path: PathBuf,
        generator: Option<Arc<dyn PlanGenerator>>,
        plans: Vec<Plan>,
    ) -> Self {
        let (changes, _) = watch::channel(plans.clone());
        let (persist_failures, _) = watch::channel(None);
        Self {
            db_path,
            generator,
            plans: Mutex::new(plans),
            changes,
            persist_failures,
            last_write: Mutex::new(None),
        }
    }

    /// Snapshot of the current collection, newest plan first.
    pub async fn plans(&self) -> Vec<Plan> {
        self.plans.lock().await.clone()
    }

    /// Looks up a single plan by id.
    pub async fn get_plan(&self, id: &str) -> Option<Plan> {
        self.plans.lock().await.iter().find(|p| p.id == id).cloned()
    }

    /// List-view summaries of the current collection.
    pub async fn plan_summaries(&self) -> Vec<PlanSummary> {
        self.plans.lock().await.iter().map(Into::into).collect()
    }

    /// Subscribes to the collection; the channel carries the full collection
    /// after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Plan>> {
        self.changes.subscribe()
    }

    /// Subscribes to persistence failures. The channel carries the most
    /// recent write error message, or `None` once a later write succeeds.
    pub fn persistence_failures(&self) -> watch::Receiver<Option<String>> {
        self.persist_failures.subscribe()
    }

    /// Waits for the most recently scheduled durable write to finish.
    pub async fn flush(&self) {
        let handle = self.last_write.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Broadcasts a committed collection and schedules its durable write.
    pub(crate) async fn commit(&self, snapshot: Vec<Plan>) {
        self.changes.send_replace(snapshot.clone());
        self.persist_later(snapshot).await;
    }

    /// Schedules a write-behind persistence task for the snapshot.
    ///
    /// Each task first awaits its predecessor, so durable writes land in
    /// commit order even when commits outpace the disk.
    async fn persist_later(&self, snapshot: Vec<Plan>) {
        let mut last_write = self.last_write.lock().await;
        let previous = last_write.take();

        let db_path = self.db_path.clone();
        let failures = self.persist_failures.clone();
        let handle = tokio::spawn(async move {
            if let Some(previous) = previous {
                let _ = previous.await;
            }

            let result = task::spawn_blocking(move || {
                let mut db = Database::new(&db_path)?;
                db.save_plans(&snapshot)
            })
            .await;

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => Err(StoreError::Configuration {
                    message: format!("Task join error: {e}"),
                }),
            };

            match outcome {
                Ok(()) => {
                    failures.send_replace(None);
                }
                Err(e) => {
                    failures.send_replace(Some(e.to_string()));
                }
            }
        });

        *last_write = Some(handle);
    }
}
