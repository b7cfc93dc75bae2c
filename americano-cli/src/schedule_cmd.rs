//! Schedule command - generate a schedule for a roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_roster(), build_schedule(), report_schedule()
//! - Level 3: (delegated to americano-core)
//! - Level 4: formatting utilities (output module)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use americano_core::{load_players, Player, Round};

use crate::output::{print_schedule_text, write_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ScheduleArgs {
    /// Roster JSON file (array of players, or object with `players`)
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Write the schedule JSON to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output schedule as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run schedule command
///
/// 1. Load the roster
/// 2. Generate the schedule
/// 3. Report it
pub fn run(args: ScheduleArgs) -> Result<()> {
    let players = load_roster(&args)?;

    tracing::info!("Scheduling {} players", players.len());

    let rounds = build_schedule(&players)?;

    report_schedule(&players, &rounds, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the roster file
fn load_roster(args: &ScheduleArgs) -> Result<Vec<Player>> {
    load_players(&args.roster)
        .with_context(|| format!("Failed to load roster: {}", args.roster.display()))
}

/// Generate the schedule
pub(crate) fn build_schedule(players: &[Player]) -> Result<Vec<Round>> {
    let rounds = americano_core::generate(players).context("Cannot schedule this roster")?;
    Ok(rounds)
}

/// Print or save the schedule
fn report_schedule(players: &[Player], rounds: &[Round], args: &ScheduleArgs) -> Result<()> {
    if args.json || args.output.is_some() {
        write_json(&rounds, args.output.as_deref())
    } else {
        print_schedule_text(players, rounds);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
