//! Text and JSON rendering shared by the commands
//!
//! Level 4 - Formatting utilities

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use americano_core::{LeaderboardEntry, Match, MatchStatus, Player, Round};

/// Pretty JSON to stdout, or to a file when `output` is set
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Map player ids to display names
pub fn name_lookup(players: &[Player]) -> HashMap<&str, &str> {
    players
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect()
}

/// One match as `A & B  vs  C & D`, with the score once play has started
pub fn format_match(m: &Match, names: &HashMap<&str, &str>) -> String {
    let name = |id: &String| names.get(id.as_str()).copied().unwrap_or(id.as_str()).to_string();
    let teams = format!(
        "{} & {}  vs  {} & {}",
        name(&m.team1[0]),
        name(&m.team1[1]),
        name(&m.team2[0]),
        name(&m.team2[1])
    );

    match m.status {
        MatchStatus::Pending => teams,
        MatchStatus::InProgress => format!("{}  ({}-{}, in progress)", teams, m.score.team1, m.score.team2),
        MatchStatus::Completed => format!("{}  ({}-{})", teams, m.score.team1, m.score.team2),
    }
}

/// Print a schedule round by round
pub fn print_schedule_text(players: &[Player], rounds: &[Round]) {
    let names = name_lookup(players);

    println!("\n=== Schedule ({} players, {} rounds) ===", players.len(), rounds.len());
    for round in rounds {
        println!("\nRound {} [{:?}]", round.round_number, round.status);
        for m in &round.matches {
            println!("  Court {}: {}", m.court, format_match(m, &names));
        }
    }
}

/// Print a ranked table
pub fn print_leaderboard_text(entries: &[LeaderboardEntry]) {
    println!("\n=== Leaderboard ===");
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>5} {:>5} {:>5} {:>4}",
        "#", "Player", "P", "W", "Won", "Lost", "Diff", "Pts"
    );
    for (rank, e) in entries.iter().enumerate() {
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>5} {:>5} {:>+5} {:>4}",
            rank + 1,
            truncate(&e.name, 20),
            e.matches_played,
            e.matches_won,
            e.sets_won,
            e.sets_lost,
            e.set_difference(),
            e.points
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max - 1).chain(std::iter::once('~')).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use americano_core::Score;

    fn players() -> Vec<Player> {
        ["Ann", "Bob", "Cid", "Dee"]
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(format!("p{}", i), *n))
            .collect()
    }

    #[test]
    fn test_format_match_states() {
        let players = players();
        let names = name_lookup(&players);
        let mut m = Match::new(
            "m",
            ["p0".into(), "p1".into()],
            ["p2".into(), "ghost".into()],
            1,
        );

        assert_eq!(format_match(&m, &names), "Ann & Bob  vs  Cid & ghost");

        m.score = Score::new(6, 4);
        m.status = MatchStatus::InProgress;
        assert!(format_match(&m, &names).ends_with("(6-4, in progress)"));

        m.status = MatchStatus::Completed;
        assert!(format_match(&m, &names).ends_with("(6-4)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd~");
    }
}
