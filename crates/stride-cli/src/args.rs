//! Command-line argument definitions using clap.
//!
//! Argument structures here stay clap-specific; each converts into the
//! core's parameter types before anything touches the store, so the core API
//! stays free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use stride_core::models::{CheckpointDay, Commitment, Experience, Timeframe};
use stride_core::params::GeneratePlan;
use stride_core::QuestionnaireAnswers;

/// Main command-line interface for the stride goal tracker
///
/// Stride turns a goal and a short questionnaire into a structured
/// achievement plan (via an external generation service) and tracks
/// completion of the plan's items: phase actions, weekly tasks, milestones,
/// day-30/60/90 checkpoints, success metrics, and daily routines.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the stride CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Track completion of plan items
    #[command(alias = "t")]
    Track {
        #[command(subcommand)]
        command: TrackCommands,
    },
    /// Show a plan's recent activity
    Activity {
        /// Plan to show activity for
        plan_id: String,
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

/// Plan lifecycle commands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new plan from a goal and questionnaire answers
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List all plans
    #[command(alias = "ls")]
    List,
    /// Show a plan with its full progress state
    Show {
        /// Plan to show
        plan_id: String,
    },
    /// Permanently delete a plan
    Delete {
        /// Plan to delete
        plan_id: String,
    },
}

/// Arguments for plan generation
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// The goal to build a plan for
    #[arg(long)]
    pub goal: String,

    /// Target timeframe (one-month, three-months, six-months, one-year)
    #[arg(long, default_value = "three-months")]
    pub timeframe: Timeframe,

    /// Weekly commitment level (light, steady, intense)
    #[arg(long, default_value = "steady")]
    pub commitment: Commitment,

    /// Prior experience (beginner, intermediate, advanced)
    #[arg(long, default_value = "beginner")]
    pub experience: Experience,

    /// Expected obstacle; repeat for several
    #[arg(long = "obstacle")]
    pub obstacles: Vec<String>,

    /// Free-text motivation
    #[arg(long, default_value = "")]
    pub motivation: String,

    /// Path to the structured plan document produced by the generation
    /// service
    #[arg(long)]
    pub document: PathBuf,
}

impl GenerateArgs {
    /// Convert CLI arguments to core generation parameters.
    pub fn into_params(self) -> GeneratePlan {
        GeneratePlan {
            goal: self.goal,
            answers: QuestionnaireAnswers {
                timeframe: self.timeframe,
                commitment: self.commitment,
                experience: self.experience,
                obstacles: self.obstacles,
                motivation: self.motivation,
            },
        }
    }
}

/// Item tracking commands; indices are 0-based positions within the plan's
/// content arrays, as shown by `plan show`
#[derive(Subcommand)]
pub enum TrackCommands {
    /// Toggle a phase key action
    Action {
        plan_id: String,
        /// Phase position
        phase: u32,
        /// Key action position within the phase
        action: u32,
    },
    /// Toggle a weekly task
    Task {
        plan_id: String,
        /// Week position
        week: u32,
        /// Task position within the week
        task: u32,
    },
    /// Toggle a week's milestone
    Milestone {
        plan_id: String,
        /// Week position
        week: u32,
    },
    /// Toggle a day-30/60/90 checkpoint item
    Checkpoint {
        plan_id: String,
        /// Checkpoint day (day30, day60, day90)
        day: CheckpointDay,
        /// Item position within the checkpoint list
        item: u32,
    },
    /// Toggle a success metric
    Metric {
        plan_id: String,
        /// Metric position
        metric: u32,
    },
    /// Log (or unlog) a routine for today
    Routine {
        plan_id: String,
        /// Routine position
        routine: u32,
    },
}
