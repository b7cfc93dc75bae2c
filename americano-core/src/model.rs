//! Tournament data model
//!
//! Field names serialize in camelCase so documents match the organizer
//! app's stored format (`roundNumber`, `matchesPlayed`, ...).

use serde::{Deserialize, Serialize};

// ============================================================================
// PLAYERS
// ============================================================================

/// Opaque player identifier, unique within a tournament
pub type PlayerId = String;

/// A registered player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// MATCHES
// ============================================================================

/// Which side of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Team1,
    Team2,
}

/// Match progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Games won by each team
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

impl Score {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }

    /// Set score for one side
    pub fn set(&mut self, team: Team, value: u32) {
        match team {
            Team::Team1 => self.team1 = value,
            Team::Team2 => self.team2 = value,
        }
    }

    /// Winning side, `None` on a draw
    pub fn winner(&self) -> Option<Team> {
        use std::cmp::Ordering;
        match self.team1.cmp(&self.team2) {
            Ordering::Greater => Some(Team::Team1),
            Ordering::Less => Some(Team::Team2),
            Ordering::Equal => None,
        }
    }
}

/// A 2v2 match on one court
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub team1: [PlayerId; 2],
    pub team2: [PlayerId; 2],
    /// 1-based court index, sequential within a round
    pub court: u32,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub status: MatchStatus,
}

impl Match {
    /// Create a pending 0-0 match
    pub fn new(id: impl Into<String>, team1: [PlayerId; 2], team2: [PlayerId; 2], court: u32) -> Self {
        Self {
            id: id.into(),
            team1,
            team2,
            court,
            score: Score::default(),
            status: MatchStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Players on one side
    pub fn team(&self, team: Team) -> &[PlayerId; 2] {
        match team {
            Team::Team1 => &self.team1,
            Team::Team2 => &self.team2,
        }
    }

    /// All four participants, team1 first
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.team1.iter().chain(self.team2.iter())
    }
}

// ============================================================================
// ROUNDS
// ============================================================================

/// Administrative round status; set by the organizer, never recomputed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

/// A set of simultaneous, player-disjoint matches
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub round_number: u32,
    pub matches: Vec<Match>,
    #[serde(default)]
    pub status: RoundStatus,
}

impl Round {
    pub fn find_match_mut(&mut self, match_id: &str) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }

    pub fn completed_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_completed()).count()
    }
}

// ============================================================================
// LEADERBOARD
// ============================================================================

/// One player's aggregated results
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: PlayerId,
    pub name: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points: u32,
}

impl LeaderboardEntry {
    /// Zeroed entry for a roster player
    pub fn new(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            matches_played: 0,
            matches_won: 0,
            sets_won: 0,
            sets_lost: 0,
            points: 0,
        }
    }

    /// Sets won minus sets lost
    pub fn set_difference(&self) -> i64 {
        i64::from(self.sets_won) - i64::from(self.sets_lost)
    }

    /// Win rate
    pub fn win_rate(&self) -> f32 {
        if self.matches_played == 0 {
            0.0
        } else {
            self.matches_won as f32 / self.matches_played as f32
        }
    }
}
