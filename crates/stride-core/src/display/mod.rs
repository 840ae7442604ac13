//! Display formatting for plans, summaries, and activity.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while newtype wrappers in [`collections`] format groups of objects with
//! consistent empty-collection handling. All formatters produce markdown so
//! the same output renders both in a rich terminal and as plain text.

pub mod collections;
pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{PlanSummaries, RecentActivity};
pub use datetime::LocalDateTime;
