//! Mutable progress state attached to a plan.
//!
//! All completion maps are sparse: an index with no entry reads as `false`,
//! and a toggle simply flips whatever the sparse read yields. Routine history
//! is a per-routine ordered set of civil dates, so logging the same day twice
//! removes it again (a true toggle, not an append-only log).

use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::activity::{ActivityCategory, ActivityEntry, ActivityKind, ACTIVITY_LOG_CAP};
use super::content::CheckpointDay;

/// Sparse index → bool completion map.
pub type CompletionMap = BTreeMap<u32, bool>;

/// Progress tracked against the shape of a plan's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    /// phase index → (action index → done)
    #[serde(default)]
    pub phase_actions: BTreeMap<u32, CompletionMap>,

    /// week index → (task index → done)
    #[serde(default)]
    pub weekly_tasks: BTreeMap<u32, CompletionMap>,

    /// week index → milestone done
    #[serde(default)]
    pub weekly_milestones: CompletionMap,

    /// routine index → set of days the routine was logged
    #[serde(default)]
    pub routine_history: BTreeMap<u32, BTreeSet<Date>>,

    /// day-30/60/90 item completion
    #[serde(default)]
    pub checkpoints: CheckpointProgress,

    /// metric index → done
    #[serde(default)]
    pub success_metrics: CompletionMap,

    /// Completion events, most recent first, capped at [`ACTIVITY_LOG_CAP`]
    #[serde(default)]
    pub activity_log: Vec<ActivityEntry>,

    /// Derived 0–100 percentage; recomputed after every mutation and never
    /// set directly by callers
    #[serde(default)]
    pub overall_progress: u8,

    /// When tracking began
    pub started_at: Timestamp,

    /// Timestamp of the most recent logged activity
    #[serde(default)]
    pub last_activity_at: Option<Timestamp>,
}

/// Completion maps for the three checkpoint lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointProgress {
    #[serde(default)]
    pub day30: CompletionMap,
    #[serde(default)]
    pub day60: CompletionMap,
    #[serde(default)]
    pub day90: CompletionMap,
}

impl CheckpointProgress {
    /// Completion map for one checkpoint day.
    pub fn map(&self, day: CheckpointDay) -> &CompletionMap {
        match day {
            CheckpointDay::Day30 => &self.day30,
            CheckpointDay::Day60 => &self.day60,
            CheckpointDay::Day90 => &self.day90,
        }
    }

    fn map_mut(&mut self, day: CheckpointDay) -> &mut CompletionMap {
        match day {
            CheckpointDay::Day30 => &mut self.day30,
            CheckpointDay::Day60 => &mut self.day60,
            CheckpointDay::Day90 => &mut self.day90,
        }
    }
}

fn toggle(map: &mut CompletionMap, index: u32) {
    let slot = map.entry(index).or_insert(false);
    *slot = !*slot;
}

fn read(map: &CompletionMap, index: u32) -> bool {
    map.get(&index).copied().unwrap_or(false)
}

impl PlanProgress {
    /// The canonical empty progress state attached to every new plan.
    pub fn empty() -> Self {
        Self {
            phase_actions: BTreeMap::new(),
            weekly_tasks: BTreeMap::new(),
            weekly_milestones: CompletionMap::new(),
            routine_history: BTreeMap::new(),
            checkpoints: CheckpointProgress::default(),
            success_metrics: CompletionMap::new(),
            activity_log: Vec::new(),
            overall_progress: 0,
            started_at: Timestamp::now(),
            last_activity_at: None,
        }
    }

    /// Flips completion of one phase action.
    pub fn toggle_phase_action(&mut self, phase_index: u32, action_index: u32) {
        toggle(
            self.phase_actions.entry(phase_index).or_default(),
            action_index,
        );
    }

    /// Flips completion of one weekly task.
    pub fn toggle_weekly_task(&mut self, week_index: u32, task_index: u32) {
        toggle(self.weekly_tasks.entry(week_index).or_default(), task_index);
    }

    /// Flips completion of one week's milestone.
    pub fn toggle_weekly_milestone(&mut self, week_index: u32) {
        toggle(&mut self.weekly_milestones, week_index);
    }

    /// Flips completion of one checkpoint item.
    pub fn toggle_checkpoint(&mut self, day: CheckpointDay, item_index: u32) {
        toggle(self.checkpoints.map_mut(day), item_index);
    }

    /// Flips completion of one success metric.
    pub fn toggle_success_metric(&mut self, metric_index: u32) {
        toggle(&mut self.success_metrics, metric_index);
    }

    /// Toggles a day in a routine's history. Returns `true` when the day was
    /// added, `false` when it was removed again.
    pub fn toggle_routine_day(&mut self, routine_index: u32, day: Date) -> bool {
        let history = self.routine_history.entry(routine_index).or_default();
        if history.remove(&day) {
            false
        } else {
            history.insert(day);
            true
        }
    }

    /// Sparse read of one phase action's completion.
    pub fn phase_action_done(&self, phase_index: u32, action_index: u32) -> bool {
        self.phase_actions
            .get(&phase_index)
            .map(|actions| read(actions, action_index))
            .unwrap_or(false)
    }

    /// Sparse read of one weekly task's completion.
    pub fn weekly_task_done(&self, week_index: u32, task_index: u32) -> bool {
        self.weekly_tasks
            .get(&week_index)
            .map(|tasks| read(tasks, task_index))
            .unwrap_or(false)
    }

    /// Sparse read of one week's milestone completion.
    pub fn weekly_milestone_done(&self, week_index: u32) -> bool {
        read(&self.weekly_milestones, week_index)
    }

    /// Sparse read of one checkpoint item's completion.
    pub fn checkpoint_done(&self, day: CheckpointDay, item_index: u32) -> bool {
        read(self.checkpoints.map(day), item_index)
    }

    /// Sparse read of one success metric's completion.
    pub fn success_metric_done(&self, metric_index: u32) -> bool {
        read(&self.success_metrics, metric_index)
    }

    /// Whether a routine was logged on the given day.
    pub fn routine_logged(&self, routine_index: u32, day: Date) -> bool {
        self.routine_history
            .get(&routine_index)
            .map(|history| history.contains(&day))
            .unwrap_or(false)
    }

    /// Days logged for one routine, oldest first.
    pub fn routine_days(&self, routine_index: u32) -> Option<&BTreeSet<Date>> {
        self.routine_history.get(&routine_index)
    }

    /// Appends a completion event to the front of the log, trims the log to
    /// its cap, and bumps `last_activity_at`.
    ///
    /// Every toggle logs, including unchecks: an item toggled back off still
    /// produces an entry with the same kind and description.
    pub fn log_activity(&mut self, kind: ActivityKind, category: ActivityCategory, text: &str) {
        let entry = ActivityEntry::new(kind, category, text);
        self.last_activity_at = Some(entry.timestamp);
        self.activity_log.insert(0, entry);
        self.activity_log.truncate(ACTIVITY_LOG_CAP);
    }
}
