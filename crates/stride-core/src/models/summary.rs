//! Plan summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::plan::Plan;
use crate::progress::{completable_items, completed_items};

/// Summary information about a plan with completion statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the generated document
    pub title: String,
    /// The goal the plan was generated for
    pub goal: String,
    /// Derived overall percentage
    pub overall_progress: u8,
    /// Total number of completable items
    pub total_items: u32,
    /// Number of completed items
    pub completed_items: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Timestamp of the most recent logged activity
    pub last_activity_at: Option<Timestamp>,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.content.title.clone(),
            goal: plan.goal.clone(),
            overall_progress: plan.progress.overall_progress,
            total_items: completable_items(&plan.content) as u32,
            completed_items: completed_items(&plan.content, &plan.progress) as u32,
            created_at: plan.created_at,
            last_activity_at: plan.progress.last_activity_at,
        }
    }
}
