//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::PlanStore;
use crate::{
    db::Database,
    error::{Result, StoreError},
    gen::PlanGenerator,
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    generator: Option<Arc<dyn PlanGenerator>>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            generator: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generation adapter used by `generate_plan`.
    ///
    /// A store built without one can read and track existing plans but fails
    /// generation with a typed error.
    pub fn with_generator(mut self, generator: Option<Arc<dyn PlanGenerator>>) -> Self {
        if let Some(generator) = generator {
            self.generator = Some(generator);
        }
        self
    }

    /// Builds the configured store, loading the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the database path is invalid and
    /// `StoreError::Database` if the snapshot cannot be read.
    pub async fn build(self) -> Result<PlanStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let plans = task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            db.load_plans()
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(PlanStore::new(db_path, self.generator, plans))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("stride.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}
