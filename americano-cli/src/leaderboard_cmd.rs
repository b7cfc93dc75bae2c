//! Leaderboard command - rank players from a tournament document
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_document(), report_leaderboard()
//! - Level 3: (delegated to americano-core)
//! - Level 4: formatting utilities (output module)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use americano_core::{LeaderboardEntry, TournamentDocument};

use crate::output::{print_leaderboard_text, write_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct LeaderboardArgs {
    /// Tournament JSON file with `players` and `schedule`
    #[arg(long, value_name = "FILE")]
    pub tournament: PathBuf,

    /// Output leaderboard as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run leaderboard command
pub fn run(args: LeaderboardArgs) -> Result<()> {
    let document = load_document(&args)?;

    let completed: usize = document
        .schedule
        .iter()
        .map(|r| r.completed_matches())
        .sum();
    tracing::info!(
        "Ranking {} players from {} completed matches",
        document.players.len(),
        completed
    );

    let entries = americano_core::calculate(&document.players, &document.schedule);

    report_leaderboard(&entries, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_document(args: &LeaderboardArgs) -> Result<TournamentDocument> {
    TournamentDocument::load(&args.tournament)
        .with_context(|| format!("Failed to load tournament: {}", args.tournament.display()))
}

fn report_leaderboard(entries: &[LeaderboardEntry], args: &LeaderboardArgs) -> Result<()> {
    if args.json {
        write_json(&entries, None)
    } else {
        print_leaderboard_text(entries);
        Ok(())
    }
}
