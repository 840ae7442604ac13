//! Derived-progress math: the overall percentage and routine streaks.
//!
//! Everything here is pure. The functions never touch storage, never mutate
//! their inputs, and are deterministic for a given content/progress pair.

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::models::{CheckpointDay, PlanContent, PlanProgress};

/// Counts every completable item in a plan's content.
///
/// Completable items are phase key actions, weekly tasks, the items of all
/// three checkpoint lists, and success metrics. Daily routines are tracked
/// for streaks and history only, and weekly milestones are a separate
/// celebration marker; neither enters the denominator.
pub fn completable_items(content: &PlanContent) -> usize {
    let phase_actions: usize = content
        .phases
        .iter()
        .map(|phase| phase.key_actions.len())
        .sum();
    let weekly_tasks: usize = content.weekly_plans.iter().map(|week| week.tasks.len()).sum();
    let checkpoint_items: usize = CheckpointDay::ALL
        .iter()
        .map(|day| content.checkpoints.items(*day).len())
        .sum();

    phase_actions + weekly_tasks + checkpoint_items + content.success_metrics.len()
}

/// Counts the completable items currently marked done, with sparse lookups
/// defaulting to false.
pub fn completed_items(content: &PlanContent, progress: &PlanProgress) -> usize {
    let mut completed = 0;

    for (phase_index, phase) in content.phases.iter().enumerate() {
        for action_index in 0..phase.key_actions.len() {
            if progress.phase_action_done(phase_index as u32, action_index as u32) {
                completed += 1;
            }
        }
    }

    for (week_index, week) in content.weekly_plans.iter().enumerate() {
        for task_index in 0..week.tasks.len() {
            if progress.weekly_task_done(week_index as u32, task_index as u32) {
                completed += 1;
            }
        }
    }

    for day in CheckpointDay::ALL {
        for item_index in 0..content.checkpoints.items(day).len() {
            if progress.checkpoint_done(day, item_index as u32) {
                completed += 1;
            }
        }
    }

    for metric_index in 0..content.success_metrics.len() {
        if progress.success_metric_done(metric_index as u32) {
            completed += 1;
        }
    }

    completed
}

/// Maps a plan's content and progress to an integer percentage in `[0, 100]`.
///
/// Rounding is half-up on the raw percentage (1 of 6 → 16.67 → 17). A plan
/// with no completable items reports 0, not an error.
pub fn calculate_progress(content: &PlanContent, progress: &PlanProgress) -> u8 {
    let total = completable_items(content);
    if total == 0 {
        return 0;
    }
    let completed = completed_items(content, progress);
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Length of the contiguous run of logged days ending at `as_of`.
///
/// A day not yet logged today does not break the streak: when `as_of` itself
/// is absent the scan starts from the previous day instead. Reads routine
/// history only; this never feeds `overall_progress`.
pub fn compute_streak(history: &BTreeSet<Date>, as_of: Date) -> u32 {
    let mut day = if history.contains(&as_of) {
        as_of
    } else {
        match as_of.yesterday() {
            Ok(previous) => previous,
            Err(_) => return 0,
        }
    };

    let mut streak = 0;
    while history.contains(&day) {
        streak += 1;
        match day.yesterday() {
            Ok(previous) => day = previous,
            Err(_) => break,
        }
    }
    streak
}
