//! Americano schedule generation
//!
//! Greedy fixture builder: each round repeatedly picks the 4-player group
//! with the fewest repeated partnerships and oppositions among the players
//! still available in that round.
//!
//! The search scans every ordered 4-subset `i<j<k<l` of the available pool,
//! so picking one match costs O(m^4) for m available players. Rosters up to
//! roughly 32 players stay fast; larger rosters are not a target. The scan
//! itself defines tournament outcomes, so it is kept as is.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate (orchestration)
//! - Level 2: build_round (phases)
//! - Level 3: pick_best_group (steps)
//! - Level 4: total_rounds, validate_roster (utilities)

use crate::conflicts::ConflictTracker;
use crate::error::ScheduleError;
use crate::model::{Match, Player, Round, RoundStatus};

/// Upper bound on generated rounds regardless of roster size
pub const MAX_ROUNDS: usize = 8;

/// Players per match
pub const PLAYERS_PER_MATCH: usize = 4;

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Generate an Americano schedule for a roster
///
/// # Arguments
/// * `players` - Roster in registration order; order drives tie-breaking
///
/// # Returns
/// Rounds in play order. The first round is `Active`, the rest `Pending`.
///
/// # Errors
/// `ScheduleError::InvalidRoster` when the roster has fewer than 4 players
/// or is not a multiple of 4.
pub fn generate(players: &[Player]) -> Result<Vec<Round>, ScheduleError> {
    validate_roster(players.len())?;

    let n = players.len();
    let rounds_to_play = total_rounds(n);
    let mut tracker = ConflictTracker::new(n);
    let mut rounds = Vec::with_capacity(rounds_to_play);

    for round_index in 0..rounds_to_play {
        let matches = build_round(players, round_index, &mut tracker);
        if matches.is_empty() {
            continue;
        }

        rounds.push(Round {
            id: format!("round-{}", round_index),
            round_number: round_index as u32 + 1,
            matches,
            status: if round_index == 0 {
                RoundStatus::Active
            } else {
                RoundStatus::Pending
            },
        });
    }

    tracing::info!(
        "Generated Americano schedule: {} players, {} rounds",
        n,
        rounds.len()
    );

    Ok(rounds)
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Fill one round, committing matches until fewer than 4 players remain
fn build_round(players: &[Player], round_index: usize, tracker: &mut ConflictTracker) -> Vec<Match> {
    let mut available: Vec<usize> = (0..players.len()).collect();
    let mut matches = Vec::new();

    while let Some((positions, conflicts)) = pick_best_group(&available, tracker) {
        let [i, j, k, l] = positions;
        let team1 = [available[i], available[j]];
        let team2 = [available[k], available[l]];

        tracker.record_match(team1, team2);

        let court = matches.len() as u32 + 1;
        tracing::debug!(
            "Round {} court {}: {}+{} vs {}+{} ({} conflicts)",
            round_index + 1,
            court,
            players[team1[0]].name,
            players[team1[1]].name,
            players[team2[0]].name,
            players[team2[1]].name,
            conflicts
        );

        matches.push(Match::new(
            format!("round-{}-match-{}", round_index, matches.len()),
            [players[team1[0]].id.clone(), players[team1[1]].id.clone()],
            [players[team2[0]].id.clone(), players[team2[1]].id.clone()],
            court,
        ));

        // Highest position first so the lower ones stay valid
        for pos in [l, k, j, i] {
            available.remove(pos);
        }
    }

    matches
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Find the lowest-conflict group among the available players
///
/// Returns positions into `available` as `[i, j, k, l]` with `i<j<k<l`,
/// meaning team1 = (i, j) and team2 = (k, l), plus the conflict score.
/// Only that one split of each 4-subset is evaluated. Ties keep the first
/// group in lexicographic scan order. `None` when fewer than 4 remain.
fn pick_best_group(available: &[usize], tracker: &ConflictTracker) -> Option<([usize; 4], u32)> {
    let m = available.len();
    let mut best: Option<([usize; 4], u32)> = None;

    for i in 0..m {
        for j in (i + 1)..m {
            for k in (j + 1)..m {
                for l in (k + 1)..m {
                    let conflicts = tracker.conflict_score(
                        [available[i], available[j]],
                        [available[k], available[l]],
                    );
                    if best.map_or(true, |(_, min)| conflicts < min) {
                        best = Some(([i, j, k, l], conflicts));
                    }
                }
            }
        }
    }

    best
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

/// Number of rounds scheduled for `n` players: min(floor((n-1)*3/4), 8)
pub fn total_rounds(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((n - 1) * 3 / 4).min(MAX_ROUNDS)
}

/// Check that a roster can be split into full matches
pub fn validate_roster(count: usize) -> Result<(), ScheduleError> {
    if count < PLAYERS_PER_MATCH || count % PLAYERS_PER_MATCH != 0 {
        return Err(ScheduleError::InvalidRoster { count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(format!("p{}", i), format!("Player {}", i)))
            .collect()
    }

    #[test]
    fn test_total_rounds() {
        assert_eq!(total_rounds(4), 2);
        assert_eq!(total_rounds(8), 5);
        assert_eq!(total_rounds(12), 8);
        assert_eq!(total_rounds(16), 8);
        assert_eq!(total_rounds(0), 0);
    }

    #[test]
    fn test_invalid_rosters_rejected() {
        for n in [0, 1, 3, 5, 6, 7, 10] {
            assert_eq!(
                generate(&roster(n)),
                Err(ScheduleError::InvalidRoster { count: n })
            );
        }
    }

    #[test]
    fn test_four_players_repeat_same_split() {
        let rounds = generate(&roster(4)).unwrap();
        assert_eq!(rounds.len(), 2);

        for round in &rounds {
            assert_eq!(round.matches.len(), 1);
            let m = &round.matches[0];
            assert_eq!(m.team1, ["p0".to_string(), "p1".to_string()]);
            assert_eq!(m.team2, ["p2".to_string(), "p3".to_string()]);
            assert_eq!(m.court, 1);
        }
    }

    #[test]
    fn test_eight_players_shape() {
        let rounds = generate(&roster(8)).unwrap();
        assert_eq!(rounds.len(), 5);

        for (r, round) in rounds.iter().enumerate() {
            assert_eq!(round.id, format!("round-{}", r));
            assert_eq!(round.round_number, r as u32 + 1);
            assert_eq!(round.matches.len(), 2);
            let courts: Vec<u32> = round.matches.iter().map(|m| m.court).collect();
            assert_eq!(courts, vec![1, 2]);
            assert_eq!(round.matches[1].id, format!("round-{}-match-1", r));
        }
        assert_eq!(rounds[0].status, RoundStatus::Active);
        assert!(rounds[1..].iter().all(|r| r.status == RoundStatus::Pending));
    }

    #[test]
    fn test_players_unique_within_round() {
        for n in [4, 8, 12, 16] {
            let rounds = generate(&roster(n)).unwrap();
            for round in &rounds {
                let mut seen = HashSet::new();
                for m in &round.matches {
                    for p in m.participants() {
                        assert!(seen.insert(p.clone()), "{} plays twice in a round", p);
                    }
                }
                assert_eq!(seen.len(), n);
            }
        }
    }

    #[test]
    fn test_first_round_follows_roster_order() {
        let rounds = generate(&roster(8)).unwrap();
        let first = &rounds[0].matches;
        assert_eq!(first[0].team1, ["p0".to_string(), "p1".to_string()]);
        assert_eq!(first[0].team2, ["p2".to_string(), "p3".to_string()]);
        assert_eq!(first[1].team1, ["p4".to_string(), "p5".to_string()]);
        assert_eq!(first[1].team2, ["p6".to_string(), "p7".to_string()]);
    }

    #[test]
    fn test_second_round_avoids_repeats() {
        let rounds = generate(&roster(8)).unwrap();
        let second = &rounds[1].matches;

        // First zero-conflict group in scan order
        assert_eq!(second[0].team1, ["p0".to_string(), "p2".to_string()]);
        assert_eq!(second[0].team2, ["p4".to_string(), "p6".to_string()]);
        assert_eq!(second[1].team1, ["p1".to_string(), "p3".to_string()]);
        assert_eq!(second[1].team2, ["p5".to_string(), "p7".to_string()]);
    }

    #[test]
    fn test_deterministic() {
        let players = roster(12);
        assert_eq!(generate(&players).unwrap(), generate(&players).unwrap());
    }

    #[test]
    fn test_pick_best_group_prefers_first_minimum() {
        let tracker = ConflictTracker::new(6);
        let available: Vec<usize> = (0..6).collect();
        assert_eq!(pick_best_group(&available, &tracker), Some(([0, 1, 2, 3], 0)));
        assert_eq!(pick_best_group(&available[..3], &tracker), None);
    }
}
