//! Data models for plans and their progress state.
//!
//! A [`Plan`] splits into two halves with very different lifecycles: the
//! generated [`PlanContent`] document, which is immutable and only read for
//! structure, and the [`PlanProgress`] ledger, which is the only part that
//! mutates. Progress is indexed positionally against content arrays, so the
//! two halves must always be interpreted together.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep data structures separate from presentation concerns.

pub mod activity;
pub mod answers;
pub mod content;
pub mod plan;
pub mod progress;
pub mod summary;


// Re-export all public types at the models level
pub use activity::{ActivityCategory, ActivityEntry, ActivityKind, ACTIVITY_LOG_CAP};
pub use answers::{Commitment, Experience, QuestionnaireAnswers, Timeframe};
pub use content::{
    CheckpointDay, Checkpoints, Diagnosis, Obstacle, Phase, PlanContent, Routine, WeeklyPlan,
};
pub use plan::Plan;
pub use progress::{CheckpointProgress, CompletionMap, PlanProgress};
pub use summary::PlanSummary;
