//! Simulate command - play a whole schedule with random scores
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_schedule(), report_results()
//! - Level 3: play_match()
//! - Level 4: create_rng(), configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use americano_core::{load_players, LeaderboardEntry, Match, MatchStatus, Round, Score};

use crate::output::{print_leaderboard_text, print_schedule_text, write_json};
use crate::schedule_cmd::build_schedule;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Roster JSON file (array of players, or object with `players`)
    #[arg(long, value_name = "FILE")]
    pub roster: PathBuf,

    /// Highest score a team can post in one match
    #[arg(long, default_value = "6")]
    pub max_score: u32,

    /// Print the played schedule before the leaderboard
    #[arg(long)]
    pub show_schedule: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Simulated tournament
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationReport {
    seed: Option<u64>,
    rounds: Vec<Round>,
    leaderboard: Vec<LeaderboardEntry>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load the roster and generate a schedule
/// 2. Play every match with random scores
/// 3. Rank and report
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let players = load_players(&args.roster)
        .with_context(|| format!("Failed to load roster: {}", args.roster.display()))?;
    let mut rounds = build_schedule(&players)?;

    tracing::info!(
        "Simulating {} rounds for {} players (max score {})",
        rounds.len(),
        players.len(),
        args.max_score
    );

    let mut rng = create_rng(seed);
    play_schedule(&mut rounds, args.max_score, &mut rng);

    let leaderboard = americano_core::calculate(&players, &rounds);

    if args.json {
        let report = SimulationReport {
            seed,
            rounds,
            leaderboard,
        };
        return write_json(&report, None);
    }

    if args.show_schedule {
        print_schedule_text(&players, &rounds);
    }
    print_leaderboard_text(&leaderboard);
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Score and complete every match in play order
fn play_schedule(rounds: &mut [Round], max_score: u32, rng: &mut ChaCha8Rng) {
    for round in rounds.iter_mut() {
        for m in round.matches.iter_mut() {
            play_match(m, max_score, rng);
            tracing::debug!(
                "Round {} court {}: {}-{}",
                round.round_number,
                m.court,
                m.score.team1,
                m.score.team2
            );
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_match(m: &mut Match, max_score: u32, rng: &mut ChaCha8Rng) {
    m.score = Score::new(rng.gen_range(0..=max_score), rng.gen_range(0..=max_score));
    m.status = MatchStatus::Completed;
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use americano_core::Player;

    fn schedule(n: usize) -> (Vec<Player>, Vec<Round>) {
        let players: Vec<Player> = (0..n)
            .map(|i| Player::new(format!("p{}", i), format!("Player {}", i)))
            .collect();
        let rounds = build_schedule(&players).unwrap();
        (players, rounds)
    }

    #[test]
    fn test_play_schedule_completes_everything() {
        let (players, mut rounds) = schedule(8);
        play_schedule(&mut rounds, 6, &mut create_rng(Some(1)));

        let all: Vec<&Match> = rounds.iter().flat_map(|r| r.matches.iter()).collect();
        assert!(all.iter().all(|m| m.is_completed()));
        assert!(all.iter().all(|m| m.score.team1 <= 6 && m.score.team2 <= 6));

        let board = americano_core::calculate(&players, &rounds);
        assert!(board.iter().all(|e| e.matches_played == 5));
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let (players, mut a) = schedule(8);
        let (_, mut b) = schedule(8);
        play_schedule(&mut a, 9, &mut create_rng(Some(42)));
        play_schedule(&mut b, 9, &mut create_rng(Some(42)));

        assert_eq!(a, b);
        assert_eq!(
            americano_core::calculate(&players, &a),
            americano_core::calculate(&players, &b)
        );
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));

        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }
}
