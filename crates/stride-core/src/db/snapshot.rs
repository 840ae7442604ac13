//! Load/save queries for the plan collection snapshot.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};
use crate::models::Plan;

/// Fixed storage key the collection is persisted under.
const PLANS_KEY: &str = "plans";

const SELECT_SNAPSHOT_SQL: &str = "SELECT value FROM snapshots WHERE key = ?1";
const UPSERT_SNAPSHOT_SQL: &str = "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Loads the persisted plan collection.
    ///
    /// A missing snapshot yields an empty collection. So does a corrupt one:
    /// a snapshot that no longer parses degrades to an empty collection
    /// instead of failing startup, and the user recreates their plans. Plans
    /// persisted before progress tracking existed deserialize with an empty
    /// ledger via the serde default on [`Plan::progress`]; that upgrade is
    /// lazy and does not write back until the next real mutation.
    pub fn load_plans(&self) -> Result<Vec<Plan>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_SNAPSHOT_SQL, params![PLANS_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to read plan snapshot")?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Replaces the persisted snapshot with the given collection.
    pub fn save_plans(&mut self, plans: &[Plan]) -> Result<()> {
        let value = serde_json::to_string(plans)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(UPSERT_SNAPSHOT_SQL, params![PLANS_KEY, value, now])
            .db_context("Failed to write plan snapshot")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
