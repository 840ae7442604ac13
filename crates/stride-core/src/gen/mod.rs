//! Plan generation adapter boundary.
//!
//! Generation is an opaque external collaborator: some service takes the
//! semantic inputs (goal plus questionnaire answers) and returns a structured
//! [`PlanContent`] document. The store only depends on the [`PlanGenerator`]
//! trait, which keeps the network call, prompting, and retry policy outside
//! the core. A failed call surfaces as [`StoreError::Generation`] and leaves
//! the plan collection untouched.
//!
//! [`StoreError::Generation`]: crate::error::StoreError::Generation

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::models::{PlanContent, QuestionnaireAnswers};

/// Semantic inputs to one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub goal: String,
    pub answers: QuestionnaireAnswers,
}

impl GenerationRequest {
    /// Deterministic context string derived from the request.
    ///
    /// Human-readable prompt wording is a presentation concern of the
    /// adapter; this string exists so two calls with the same inputs are
    /// recognizably the same request.
    pub fn prompt_context(&self) -> String {
        let mut parts = vec![
            format!("goal={}", self.goal),
            format!("timeframe={}", self.answers.timeframe.as_str()),
            format!("commitment={}", self.answers.commitment.as_str()),
            format!("experience={}", self.answers.experience.as_str()),
        ];
        if !self.answers.obstacles.is_empty() {
            parts.push(format!("obstacles={}", self.answers.obstacles.join(";")));
        }
        if !self.answers.motivation.is_empty() {
            parts.push(format!("motivation={}", self.answers.motivation));
        }
        parts.join("\n")
    }
}

/// External collaborator that turns a request into a plan document.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generates a structured plan document for the request.
    async fn generate(&self, request: &GenerationRequest) -> Result<PlanContent>;
}

/// Checks that a generated document is well-formed enough to be indexed
/// positionally by the progress ledger.
///
/// This is a shape check only; it passes no judgment on the quality of the
/// generated plan.
pub fn validate_content(content: &PlanContent) -> Result<()> {
    if content.title.trim().is_empty() {
        return Err(StoreError::generation("generated plan has no title"));
    }
    for (index, phase) in content.phases.iter().enumerate() {
        if phase.name.trim().is_empty() {
            return Err(StoreError::generation(format!(
                "generated phase {index} has no name"
            )));
        }
    }
    for (index, week) in content.weekly_plans.iter().enumerate() {
        if week.week == 0 {
            return Err(StoreError::generation(format!(
                "generated weekly plan {index} has week number 0"
            )));
        }
    }
    for (index, routine) in content.routines.iter().enumerate() {
        if routine.name.trim().is_empty() {
            return Err(StoreError::generation(format!(
                "generated routine {index} has no name"
            )));
        }
    }
    Ok(())
}
