//! Plan generation through the adapter boundary.

use super::PlanStore;
use crate::error::{Result, StoreError};
use crate::gen::{validate_content, GenerationRequest};
use crate::models::Plan;
use crate::params::GeneratePlan;

impl PlanStore {
    /// Generates a new plan and prepends it to the collection.
    ///
    /// Delegates to the configured generation adapter, validates the shape
    /// of the returned document, and wraps it with empty progress. The
    /// collection lock is not held across the adapter call, so tracking
    /// operations on existing plans stay responsive while generation runs,
    /// and a caller dropping this future mid-call cannot corrupt the store.
    ///
    /// # Errors
    ///
    /// Any adapter failure or shape violation surfaces as
    /// [`StoreError::Generation`]; the collection is left exactly as it was
    /// and no partial plan is ever persisted.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let goal = params.goal.trim();
        if goal.is_empty() {
            return Err(StoreError::invalid_input("goal", "must not be empty"));
        }

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| StoreError::generation("no generation adapter configured"))?;

        let request = GenerationRequest {
            goal: goal.to_string(),
            answers: params.answers.clone(),
        };
        let content = generator.generate(&request).await?;
        validate_content(&content)?;

        let plan = Plan::new(goal.to_string(), params.answers.clone(), content);

        let snapshot = {
            let mut plans = self.plans.lock().await;
            plans.insert(0, plan.clone());
            plans.clone()
        };
        self.commit(snapshot).await;

        Ok(plan)
    }
}
