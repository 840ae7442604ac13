//! Toggle/log/delete operations on the plan collection.
//!
//! All operations take a plan id and are silent no-ops when no plan matches;
//! they return the updated plan (or `None`) so callers can render the result
//! without re-reading the collection.

use jiff::Zoned;

use super::PlanStore;
use crate::models::{ActivityCategory, ActivityKind, Plan};
use crate::params::{
    LogRoutine, PlanId, ToggleCheckpoint, TogglePhaseAction, ToggleSuccessMetric,
    ToggleWeeklyMilestone, ToggleWeeklyTask,
};

impl PlanStore {
    /// Locates a plan, applies a transition to a clone of it, swaps the clone
    /// in, and commits the resulting collection.
    ///
    /// Returns `None` without touching the collection when the id is unknown.
    async fn update_plan(
        &self,
        plan_id: &str,
        apply: impl FnOnce(&mut Plan),
    ) -> Option<Plan> {
        let (updated, snapshot) = {
            let mut plans = self.plans.lock().await;
            let slot = plans.iter_mut().find(|plan| plan.id == plan_id)?;

            let mut updated = slot.clone();
            apply(&mut updated);
            *slot = updated.clone();
            (updated, plans.clone())
        };

        self.commit(snapshot).await;
        Some(updated)
    }

    /// Flips one phase key action and logs the event.
    pub async fn toggle_phase_action(&self, params: &TogglePhaseAction) -> Option<Plan> {
        self.update_plan(&params.plan_id, |plan| {
            plan.progress
                .toggle_phase_action(params.phase_index, params.action_index);
            plan.record(
                ActivityKind::TaskCompleted,
                ActivityCategory::Phase,
                &params.action_text,
            );
        })
        .await
    }

    /// Flips one weekly task and logs the event.
    pub async fn toggle_weekly_task(&self, params: &ToggleWeeklyTask) -> Option<Plan> {
        self.update_plan(&params.plan_id, |plan| {
            plan.progress
                .toggle_weekly_task(params.week_index, params.task_index);
            plan.record(
                ActivityKind::TaskCompleted,
                ActivityCategory::Weekly,
                &params.task_text,
            );
        })
        .await
    }

    /// Flips one week's milestone and logs the event.
    pub async fn toggle_weekly_milestone(&self, params: &ToggleWeeklyMilestone) -> Option<Plan> {
        self.update_plan(&params.plan_id, |plan| {
            plan.progress.toggle_weekly_milestone(params.week_index);
            plan.record(
                ActivityKind::MilestoneReached,
                ActivityCategory::Weekly,
                &params.milestone_text,
            );
        })
        .await
    }

    /// Flips one checkpoint item and logs the event.
    pub async fn toggle_checkpoint(&self, params: &ToggleCheckpoint) -> Option<Plan> {
        self.update_plan(&params.plan_id, |plan| {
            plan.progress.toggle_checkpoint(params.day, params.item_index);
            plan.record(
                ActivityKind::CheckpointReached,
                ActivityCategory::Checkpoint,
                &params.item_text,
            );
        })
        .await
    }

    /// Flips one success metric and logs the event.
    pub async fn toggle_success_metric(&self, params: &ToggleSuccessMetric) -> Option<Plan> {
        self.update_plan(&params.plan_id, |plan| {
            plan.progress.toggle_success_metric(params.metric_index);
            plan.record(
                ActivityKind::MilestoneReached,
                ActivityCategory::Metric,
                &params.metric_text,
            );
        })
        .await
    }

    /// Toggles today's date in a routine's history and logs the event.
    ///
    /// Today is the current calendar day in the system timezone. Routines
    /// never contribute to `overall_progress`; the recompute inside `record`
    /// is a no-op for them by construction.
    pub async fn log_routine(&self, params: &LogRoutine) -> Option<Plan> {
        let today = Zoned::now().date();
        self.update_plan(&params.plan_id, |plan| {
            plan.progress.toggle_routine_day(params.routine_index, today);
            plan.record(
                ActivityKind::RoutineDone,
                ActivityCategory::Routine,
                &params.routine_name,
            );
        })
        .await
    }

    /// Removes a plan from the collection and persists the result.
    ///
    /// No activity entry is written: the plan no longer exists to log
    /// against. Returns whether a plan was actually removed.
    pub async fn delete_plan(&self, params: &PlanId) -> bool {
        let snapshot = {
            let mut plans = self.plans.lock().await;
            let before = plans.len();
            plans.retain(|plan| plan.id != params.id);
            if plans.len() == before {
                return false;
            }
            plans.clone()
        };

        self.commit(snapshot).await;
        true
    }
}
