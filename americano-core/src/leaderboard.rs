//! Leaderboard calculation
//!
//! Recomputed from the full match history on every call. Scores can be
//! edited after the fact, so nothing is accumulated between calls.

use rustc_hash::FxHashMap;

use crate::model::{LeaderboardEntry, Match, Player, Round, Team};

/// Points for a match win
pub const WIN_POINTS: u32 = 3;
/// Points for a draw
pub const DRAW_POINTS: u32 = 2;
/// Points for a match loss
pub const LOSS_POINTS: u32 = 1;

/// Rank players from the completed matches of a schedule
///
/// Every roster player gets an entry, even with no completed matches. Match
/// participants missing from the roster are skipped. Ordering is points,
/// then matches won, then set difference, all descending; full ties keep
/// roster order.
pub fn calculate(players: &[Player], rounds: &[Round]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(players.len());
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for player in players {
        if index.contains_key(player.id.as_str()) {
            continue;
        }
        index.insert(player.id.as_str(), entries.len());
        entries.push(LeaderboardEntry::new(player));
    }

    let completed = rounds
        .iter()
        .flat_map(|round| round.matches.iter())
        .filter(|m| m.is_completed());

    for m in completed {
        apply_match(m, &index, &mut entries);
    }

    sort_entries(&mut entries);
    entries
}

/// Fold one completed match into the entries
fn apply_match(m: &Match, index: &FxHashMap<&str, usize>, entries: &mut [LeaderboardEntry]) {
    let winner = m.score.winner();

    for team in [Team::Team1, Team::Team2] {
        let (won, lost) = match team {
            Team::Team1 => (m.score.team1, m.score.team2),
            Team::Team2 => (m.score.team2, m.score.team1),
        };

        for player_id in m.team(team) {
            let Some(&i) = index.get(player_id.as_str()) else {
                continue;
            };
            let entry = &mut entries[i];

            // Totals saturate on out-of-range scores
            entry.matches_played = entry.matches_played.saturating_add(1);
            entry.sets_won = entry.sets_won.saturating_add(won);
            entry.sets_lost = entry.sets_lost.saturating_add(lost);

            let points = match winner {
                Some(w) if w == team => {
                    entry.matches_won = entry.matches_won.saturating_add(1);
                    WIN_POINTS
                }
                Some(_) => LOSS_POINTS,
                None => DRAW_POINTS,
            };
            entry.points = entry.points.saturating_add(points);
        }
    }
}

/// Stable sort: points, matches won, set difference (all descending)
fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.matches_won.cmp(&a.matches_won))
            .then_with(|| b.set_difference().cmp(&a.set_difference()))
    });
}
