//! Display implementations for domain models.
//!
//! A full [`Plan`] renders as a markdown document with checkbox glyphs driven
//! by its progress ledger; [`PlanSummary`] renders as a single compact line
//! for lists; [`ActivityEntry`] as one log line.

use std::fmt;

use jiff::Zoned;

use super::datetime::LocalDateTime;
use crate::models::{ActivityEntry, CheckpointDay, Plan, PlanSummary};
use crate::progress::compute_streak;

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.content.title)?;
        writeln!(f)?;
        writeln!(f, "**ID:** {}", self.id)?;
        writeln!(f, "**Goal:** {}", self.goal)?;
        writeln!(f, "**Progress:** {}%", self.progress.overall_progress)?;
        writeln!(f, "**Created:** {}", LocalDateTime(&self.created_at))?;
        if !self.content.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.content.summary)?;
        }

        if !self.content.phases.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Phases")?;
            for (phase_index, phase) in self.content.phases.iter().enumerate() {
                writeln!(f)?;
                if phase.duration.is_empty() {
                    writeln!(f, "### {}. {}", phase_index + 1, phase.name)?;
                } else {
                    writeln!(f, "### {}. {} ({})", phase_index + 1, phase.name, phase.duration)?;
                }
                if !phase.objective.is_empty() {
                    writeln!(f, "{}", phase.objective)?;
                }
                for (action_index, action) in phase.key_actions.iter().enumerate() {
                    let done = self
                        .progress
                        .phase_action_done(phase_index as u32, action_index as u32);
                    writeln!(f, "- {} {}", checkbox(done), action)?;
                }
            }
        }

        if !self.content.weekly_plans.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Weekly plans")?;
            for (week_index, week) in self.content.weekly_plans.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "### Week {}: {}", week.week, week.focus)?;
                for (task_index, task) in week.tasks.iter().enumerate() {
                    let done = self
                        .progress
                        .weekly_task_done(week_index as u32, task_index as u32);
                    writeln!(f, "- {} {}", checkbox(done), task)?;
                }
                if !week.milestone.is_empty() {
                    let done = self.progress.weekly_milestone_done(week_index as u32);
                    writeln!(f, "- {} Milestone: {}", checkbox(done), week.milestone)?;
                }
            }
        }

        if !self.content.routines.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Routines")?;
            let today = Zoned::now().date();
            for (routine_index, routine) in self.content.routines.iter().enumerate() {
                let streak = self
                    .progress
                    .routine_days(routine_index as u32)
                    .map(|history| compute_streak(history, today))
                    .unwrap_or(0);
                writeln!(
                    f,
                    "- {} ({}, {}) — streak: {} day(s)",
                    routine.name, routine.frequency, routine.duration, streak
                )?;
            }
        }

        let any_checkpoints = CheckpointDay::ALL
            .iter()
            .any(|day| !self.content.checkpoints.items(*day).is_empty());
        if any_checkpoints {
            writeln!(f)?;
            writeln!(f, "## Checkpoints")?;
            for day in CheckpointDay::ALL {
                let items = self.content.checkpoints.items(day);
                if items.is_empty() {
                    continue;
                }
                writeln!(f)?;
                writeln!(f, "### {}", day.as_str())?;
                for (item_index, item) in items.iter().enumerate() {
                    let done = self.progress.checkpoint_done(day, item_index as u32);
                    writeln!(f, "- {} {}", checkbox(done), item)?;
                }
            }
        }

        if !self.content.success_metrics.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Success metrics")?;
            for (metric_index, metric) in self.content.success_metrics.iter().enumerate() {
                let done = self.progress.success_metric_done(metric_index as u32);
                writeln!(f, "- {} {}", checkbox(done), metric)?;
            }
        }

        if !self.content.motivational_quote.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.content.motivational_quote)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** — {}% ({}/{} items) — `{}`",
            self.title, self.overall_progress, self.completed_items, self.total_items, self.id
        )
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} ({})",
            LocalDateTime(&self.timestamp),
            self.description,
            self.category.as_str()
        )
    }
}
