//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{ActivityEntry, PlanSummary};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles empty collections gracefully so callers never special-case them.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans yet. Generate one with `plan generate`.");
        }
        for (index, summary) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, summary)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a plan's recent activity.
pub struct RecentActivity(pub Vec<ActivityEntry>);

impl fmt::Display for RecentActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activity recorded yet.");
        }
        for entry in &self.0 {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}
