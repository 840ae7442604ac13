//! Activity log entries recording completion events.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Maximum number of entries retained per plan; older entries are silently
/// dropped once the cap is exceeded.
pub const ACTIVITY_LOG_CAP: usize = 100;

/// Kind of completion event an entry records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TaskCompleted,
    MilestoneReached,
    CheckpointReached,
    RoutineDone,
}

impl ActivityKind {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::TaskCompleted => "task_completed",
            ActivityKind::MilestoneReached => "milestone_reached",
            ActivityKind::CheckpointReached => "checkpoint_reached",
            ActivityKind::RoutineDone => "routine_done",
        }
    }
}

/// Part of the plan the event belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Phase,
    Weekly,
    Checkpoint,
    Metric,
    Routine,
}

impl ActivityCategory {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Phase => "phase",
            ActivityCategory::Weekly => "weekly",
            ActivityCategory::Checkpoint => "checkpoint",
            ActivityCategory::Metric => "metric",
            ActivityCategory::Routine => "routine",
        }
    }
}

/// One immutable record of a completion event.
///
/// The description is a snapshot of the item's display text at toggle time,
/// not a live reference into the plan content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub category: ActivityCategory,
}

impl ActivityEntry {
    /// Creates a fresh entry stamped with the current time.
    pub fn new(kind: ActivityKind, category: ActivityCategory, description: &str) -> Self {
        Self {
            id: Ulid::new().to_string(),
            timestamp: Timestamp::now(),
            kind,
            description: description.to_string(),
            category,
        }
    }
}
