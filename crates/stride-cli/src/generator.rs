//! File-fed generation adapter.
//!
//! The generation service itself (prompting, network, schema enforcement) is
//! external to this tool; the CLI consumes its output document from a file.
//! Everything downstream (validation, wrapping, persistence) is identical
//! to any other adapter.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use stride_core::{GenerationRequest, PlanContent, PlanGenerator, Result, StoreError};

/// Adapter that reads the generated plan document from a JSON file.
pub struct DocumentFileGenerator {
    path: PathBuf,
}

impl DocumentFileGenerator {
    /// Creates an adapter reading from the given document path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PlanGenerator for DocumentFileGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<PlanContent> {
        debug!(
            "loading plan document from {} for context:\n{}",
            self.path.display(),
            request.prompt_context()
        );

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StoreError::generation(format!(
                "failed to read plan document {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            StoreError::generation(format!("plan document is not a valid plan: {e}"))
        })
    }
}
