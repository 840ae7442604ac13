//! The AI-generated plan document.
//!
//! `PlanContent` is immutable after creation: the user never edits it, the
//! rest of the system only reads it for structure. Progress state is indexed
//! positionally against these arrays, so their lengths must stay stable for
//! the lifetime of a plan.

use serde::{Deserialize, Serialize};

/// Structured achievement plan returned by the generation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanContent {
    /// Display title of the plan
    pub title: String,

    /// Short summary of the roadmap
    #[serde(default)]
    pub summary: String,

    /// Where the user stands and what separates them from the goal
    #[serde(default)]
    pub diagnosis: Diagnosis,

    /// Coarse-grained stages, each with key actions and deliverables
    #[serde(default)]
    pub phases: Vec<Phase>,

    /// Week-indexed task bundles
    #[serde(default)]
    pub weekly_plans: Vec<WeeklyPlan>,

    /// Recurring habits tracked by date-logging rather than completion
    #[serde(default)]
    pub routines: Vec<Routine>,

    /// Anticipated obstacles with mitigations
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,

    /// Day-30/60/90 milestone lists
    #[serde(default)]
    pub checkpoints: Checkpoints,

    /// Top-level completable indicators of goal achievement
    #[serde(default)]
    pub success_metrics: Vec<String>,

    /// Closing quote shown with the plan
    #[serde(default)]
    pub motivational_quote: String,
}

/// Assessment of the user's starting point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub gap: String,
    #[serde(default)]
    pub success_factors: Vec<String>,
}

/// A coarse-grained stage of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub key_actions: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// One week's focus, tasks, and milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// 1-based week number
    pub week: u32,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub milestone: String,
}

/// A recurring habit attached to the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub name: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// An anticipated obstacle with its mitigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacle {
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub prevention: String,
}

/// Day-30/60/90 milestone item lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoints {
    #[serde(default)]
    pub day30: Vec<String>,
    #[serde(default)]
    pub day60: Vec<String>,
    #[serde(default)]
    pub day90: Vec<String>,
}

impl Checkpoints {
    /// Items for one checkpoint day.
    pub fn items(&self, day: CheckpointDay) -> &[String] {
        match day {
            CheckpointDay::Day30 => &self.day30,
            CheckpointDay::Day60 => &self.day60,
            CheckpointDay::Day90 => &self.day90,
        }
    }
}

/// Selector for one of the three checkpoint lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointDay {
    Day30,
    Day60,
    Day90,
}

impl CheckpointDay {
    /// All three checkpoint days, in chronological order.
    pub const ALL: [CheckpointDay; 3] = [
        CheckpointDay::Day30,
        CheckpointDay::Day60,
        CheckpointDay::Day90,
    ];

    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckpointDay::Day30 => "day30",
            CheckpointDay::Day60 => "day60",
            CheckpointDay::Day90 => "day90",
        }
    }
}

impl std::str::FromStr for CheckpointDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day30" | "30" => Ok(CheckpointDay::Day30),
            "day60" | "60" => Ok(CheckpointDay::Day60),
            "day90" | "90" => Ok(CheckpointDay::Day90),
            _ => Err(format!("Invalid checkpoint day: {s}")),
        }
    }
}
