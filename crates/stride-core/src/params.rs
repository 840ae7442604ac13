//! Parameter types for store operations.
//!
//! These are interface-agnostic: the CLI (or any other frontend) converts its
//! own argument structures into these before calling the store, keeping
//! framework concerns out of the core API.

use crate::models::{CheckpointDay, QuestionnaireAnswers};

/// Parameters for generating a new plan.
#[derive(Debug, Clone)]
pub struct GeneratePlan {
    /// Free-text goal; must be non-empty after trimming
    pub goal: String,
    /// Questionnaire snapshot to freeze into the plan
    pub answers: QuestionnaireAnswers,
}

/// Parameters identifying a plan.
#[derive(Debug, Clone)]
pub struct PlanId {
    pub id: String,
}

/// Parameters for flipping one phase key action.
#[derive(Debug, Clone)]
pub struct TogglePhaseAction {
    pub plan_id: String,
    pub phase_index: u32,
    pub action_index: u32,
    /// Display text snapshotted into the activity log
    pub action_text: String,
}

/// Parameters for flipping one weekly task.
#[derive(Debug, Clone)]
pub struct ToggleWeeklyTask {
    pub plan_id: String,
    pub week_index: u32,
    pub task_index: u32,
    pub task_text: String,
}

/// Parameters for flipping one week's milestone.
#[derive(Debug, Clone)]
pub struct ToggleWeeklyMilestone {
    pub plan_id: String,
    pub week_index: u32,
    pub milestone_text: String,
}

/// Parameters for flipping one checkpoint item.
#[derive(Debug, Clone)]
pub struct ToggleCheckpoint {
    pub plan_id: String,
    pub day: CheckpointDay,
    pub item_index: u32,
    pub item_text: String,
}

/// Parameters for flipping one success metric.
#[derive(Debug, Clone)]
pub struct ToggleSuccessMetric {
    pub plan_id: String,
    pub metric_index: u32,
    pub metric_text: String,
}

/// Parameters for logging a routine for today.
#[derive(Debug, Clone)]
pub struct LogRoutine {
    pub plan_id: String,
    pub routine_index: u32,
    pub routine_name: String,
}
