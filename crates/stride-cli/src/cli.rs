//! Command handlers bridging parsed arguments to the plan store.

use anyhow::{Context, Result};
use stride_core::params::{
    LogRoutine, PlanId, ToggleCheckpoint, TogglePhaseAction, ToggleSuccessMetric,
    ToggleWeeklyMilestone, ToggleWeeklyTask,
};
use stride_core::{Plan, PlanStore, PlanSummaries, RecentActivity};

use crate::args::{PlanCommands, TrackCommands};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher owning the store and renderer.
pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a dispatcher over a built store.
    pub fn new(store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Waits for the last scheduled snapshot write before the process exits.
    pub async fn flush(&self) {
        self.store.flush().await;
    }

    /// Handles plan lifecycle commands.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let params = args.into_params();
                let plan = self
                    .store
                    .generate_plan(&params)
                    .await
                    .context("Plan generation failed")?;

                self.renderer
                    .render(&format!("# Generated: {}\n\n", plan.content.title));
                self.renderer.line(&format!("Plan ID: {}", plan.id));
                self.renderer.line(&format!(
                    "{} phases, {} weeks, {} routines",
                    plan.content.phases.len(),
                    plan.content.weekly_plans.len(),
                    plan.content.routines.len()
                ));
            }
            PlanCommands::List => {
                let summaries = PlanSummaries(self.store.plan_summaries().await);
                self.renderer.render(&summaries.to_string());
            }
            PlanCommands::Show { plan_id } => match self.store.get_plan(&plan_id).await {
                Some(plan) => self.renderer.render(&plan.to_string()),
                None => self.renderer.line(&format!("Plan not found: {plan_id}")),
            },
            PlanCommands::Delete { plan_id } => {
                if self.store.delete_plan(&PlanId { id: plan_id.clone() }).await {
                    self.renderer.line(&format!("Deleted plan {plan_id}"));
                } else {
                    self.renderer.line(&format!("Plan not found: {plan_id}"));
                }
            }
        }
        Ok(())
    }

    /// Handles item tracking commands.
    ///
    /// Item display text is resolved from the plan's immutable content by
    /// index before the toggle, the same way an interactive frontend derives
    /// it while rendering the plan.
    pub async fn handle_track_command(&self, command: TrackCommands) -> Result<()> {
        let plan_id = match &command {
            TrackCommands::Action { plan_id, .. }
            | TrackCommands::Task { plan_id, .. }
            | TrackCommands::Milestone { plan_id, .. }
            | TrackCommands::Checkpoint { plan_id, .. }
            | TrackCommands::Metric { plan_id, .. }
            | TrackCommands::Routine { plan_id, .. } => plan_id.clone(),
        };

        let Some(plan) = self.store.get_plan(&plan_id).await else {
            self.renderer.line(&format!("Plan not found: {plan_id}"));
            return Ok(());
        };

        let updated = match command {
            TrackCommands::Action { phase, action, .. } => {
                let text = plan
                    .content
                    .phases
                    .get(phase as usize)
                    .and_then(|p| p.key_actions.get(action as usize))
                    .cloned()
                    .with_context(|| format!("no key action {action} in phase {phase}"))?;
                self.store
                    .toggle_phase_action(&TogglePhaseAction {
                        plan_id,
                        phase_index: phase,
                        action_index: action,
                        action_text: text,
                    })
                    .await
            }
            TrackCommands::Task { week, task, .. } => {
                let text = plan
                    .content
                    .weekly_plans
                    .get(week as usize)
                    .and_then(|w| w.tasks.get(task as usize))
                    .cloned()
                    .with_context(|| format!("no task {task} in week {week}"))?;
                self.store
                    .toggle_weekly_task(&ToggleWeeklyTask {
                        plan_id,
                        week_index: week,
                        task_index: task,
                        task_text: text,
                    })
                    .await
            }
            TrackCommands::Milestone { week, .. } => {
                let text = plan
                    .content
                    .weekly_plans
                    .get(week as usize)
                    .map(|w| w.milestone.clone())
                    .with_context(|| format!("no week {week} in plan"))?;
                self.store
                    .toggle_weekly_milestone(&ToggleWeeklyMilestone {
                        plan_id,
                        week_index: week,
                        milestone_text: text,
                    })
                    .await
            }
            TrackCommands::Checkpoint { day, item, .. } => {
                let text = plan
                    .content
                    .checkpoints
                    .items(day)
                    .get(item as usize)
                    .cloned()
                    .with_context(|| {
                        format!("no item {item} in checkpoint {}", day.as_str())
                    })?;
                self.store
                    .toggle_checkpoint(&ToggleCheckpoint {
                        plan_id,
                        day,
                        item_index: item,
                        item_text: text,
                    })
                    .await
            }
            TrackCommands::Metric { metric, .. } => {
                let text = plan
                    .content
                    .success_metrics
                    .get(metric as usize)
                    .cloned()
                    .with_context(|| format!("no success metric {metric} in plan"))?;
                self.store
                    .toggle_success_metric(&ToggleSuccessMetric {
                        plan_id,
                        metric_index: metric,
                        metric_text: text,
                    })
                    .await
            }
            TrackCommands::Routine { routine, .. } => {
                let name = plan
                    .content
                    .routines
                    .get(routine as usize)
                    .map(|r| r.name.clone())
                    .with_context(|| format!("no routine {routine} in plan"))?;
                self.store
                    .log_routine(&LogRoutine {
                        plan_id,
                        routine_index: routine,
                        routine_name: name,
                    })
                    .await
            }
        };

        match updated {
            Some(plan) => self.render_tracked(&plan),
            // Deleted between the read and the toggle; the store treated it
            // as a no-op.
            None => self.renderer.line("Plan not found"),
        }
        Ok(())
    }

    fn render_tracked(&self, plan: &Plan) {
        if let Some(entry) = plan.progress.activity_log.first() {
            self.renderer.line(&format!(
                "Logged \"{}\" — overall {}%",
                entry.description, plan.progress.overall_progress
            ));
        }
    }

    /// Shows a plan's recent activity, newest first.
    pub async fn show_activity(&self, plan_id: &str, limit: usize) -> Result<()> {
        match self.store.get_plan(plan_id).await {
            Some(plan) => {
                let mut entries = plan.progress.activity_log;
                entries.truncate(limit);
                self.renderer.render(&RecentActivity(entries).to_string());
            }
            None => self.renderer.line(&format!("Plan not found: {plan_id}")),
        }
        Ok(())
    }
}
