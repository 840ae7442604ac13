//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::activity::{ActivityCategory, ActivityKind};
use super::answers::QuestionnaireAnswers;
use super::content::PlanContent;
use super::progress::PlanProgress;
use crate::progress::calculate_progress;

/// A single goal-to-roadmap artifact: the generated document plus its mutable
/// progress state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Opaque unique identifier, assigned at creation, the sole lookup key
    pub id: String,

    /// Free-text goal the plan was generated for
    pub goal: String,

    /// Frozen questionnaire snapshot used for generation
    pub answers: QuestionnaireAnswers,

    /// The generated structured document; never edited after creation
    pub content: PlanContent,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// The only mutable part of a plan.
    ///
    /// Plans persisted before progress tracking existed lack this field;
    /// the serde default upgrades them to an empty ledger on load without
    /// forcing a write.
    #[serde(default = "PlanProgress::empty")]
    pub progress: PlanProgress,
}

impl Plan {
    /// Wraps freshly generated content into a plan with empty progress.
    pub fn new(goal: String, answers: QuestionnaireAnswers, content: PlanContent) -> Self {
        Self {
            id: Ulid::new().to_string(),
            goal,
            answers,
            content,
            created_at: Timestamp::now(),
            progress: PlanProgress::empty(),
        }
    }

    /// Records a completion event and re-derives `overall_progress`.
    ///
    /// This is the single mutation tail shared by every toggle/log operation:
    /// no path may update progress state without passing through here, which
    /// is what keeps the derived percentage from ever going stale.
    pub fn record(&mut self, kind: ActivityKind, category: ActivityCategory, text: &str) {
        self.progress.log_activity(kind, category, text);
        self.progress.overall_progress = calculate_progress(&self.content, &self.progress);
    }
}
