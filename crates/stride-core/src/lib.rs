//! Core library for the Stride goal-tracking application.
//!
//! Stride turns a free-text goal plus a short questionnaire into a
//! structured, AI-generated achievement plan, then tracks completion of the
//! plan's items over time. This crate owns the part with real invariants:
//! the progress ledger attached to each plan, the pure calculator that
//! derives an overall percentage from it, and the store protocol that keeps
//! the persisted collection consistent across partial updates.
//!
//! # Architecture
//!
//! - [`models`]: the plan document (immutable) and its progress ledger
//!   (the only mutable state), plus activity log entries
//! - [`progress`]: pure derived math (overall percentage, routine streaks)
//! - [`store`]: the [`PlanStore`] owning the collection, its mutation
//!   protocol, and write-behind persistence
//! - [`gen`]: the external generation adapter boundary
//! - [`db`]: SQLite snapshot persistence
//! - [`display`]: markdown Display implementations and collection wrappers
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stride_core::{params::TogglePhaseAction, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("stride.db"))
//!     .build()
//!     .await?;
//!
//! for summary in store.plan_summaries().await {
//!     println!("{summary}");
//! }
//!
//! // Flip the first key action of the first phase of some plan.
//! let updated = store
//!     .toggle_phase_action(&TogglePhaseAction {
//!         plan_id: "01J0000000000000000000000".to_string(),
//!         phase_index: 0,
//!         action_index: 0,
//!         action_text: "Draft the outline".to_string(),
//!     })
//!     .await;
//!
//! if let Some(plan) = updated {
//!     println!("now at {}%", plan.progress.overall_progress);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod gen;
pub mod models;
pub mod params;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{LocalDateTime, PlanSummaries, RecentActivity};
pub use error::{Result, StoreError};
pub use gen::{GenerationRequest, PlanGenerator};
pub use models::{
    ActivityCategory, ActivityEntry, ActivityKind, CheckpointDay, Plan, PlanContent, PlanProgress,
    PlanSummary, QuestionnaireAnswers, ACTIVITY_LOG_CAP,
};
pub use progress::{calculate_progress, compute_streak};
pub use store::{PlanStore, StoreBuilder};
