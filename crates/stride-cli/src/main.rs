//! Stride CLI application
//!
//! Command-line interface for tracking AI-generated goal achievement plans.

mod args;
mod cli;
mod generator;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands, PlanCommands};
use clap::Parser;
use cli::Cli;
use generator::DocumentFileGenerator;
use log::{info, warn};
use renderer::TerminalRenderer;
use stride_core::{PlanGenerator, StoreBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    // The generation adapter is only wired up when this invocation can
    // actually generate; every other command works against existing plans.
    let generator: Option<Arc<dyn PlanGenerator>> = match &command {
        Commands::Plan {
            command: PlanCommands::Generate(args),
        } => Some(Arc::new(DocumentFileGenerator::new(args.document.clone()))),
        _ => None,
    };

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .with_generator(generator)
        .build()
        .await
        .context("Failed to initialize plan store")?;

    // Surface write-behind persistence failures without rolling back state.
    let mut persist_failures = store.persistence_failures();
    tokio::spawn(async move {
        while persist_failures.changed().await.is_ok() {
            let failure = persist_failures.borrow_and_update().clone();
            if let Some(message) = failure {
                warn!("plan snapshot write failed: {message}");
            }
        }
    });

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Stride started");

    let outcome = match command {
        Commands::Plan { command } => cli.handle_plan_command(command).await,
        Commands::Track { command } => cli.handle_track_command(command).await,
        Commands::Activity { plan_id, limit } => cli.show_activity(&plan_id, limit).await,
    };

    // Let the last snapshot write land before the process exits.
    cli.flush().await;

    outcome
}
