//! Americano Core - Doubles tournament scheduling and scoring
//!
//! This crate provides the tournament engine:
//! - Greedy Americano schedule generation with partner/opponent history
//! - Leaderboard calculation from completed matches
//! - Tournament state mutated through explicit actions
//! - A registry of an organizer's tournaments
//!
//! `schedule::generate` and `leaderboard::calculate` are pure: no I/O, no
//! hidden state, and they never modify their inputs.

pub mod config;
pub mod conflicts;
pub mod document;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod registry;
pub mod schedule;
pub mod tournament;

// Re-exports for convenient access
pub use config::TournamentSettings;
pub use conflicts::ConflictTracker;
pub use document::{load_players, parse_players, TournamentDocument};
pub use error::{ScheduleError, TournamentError};
pub use leaderboard::calculate;
pub use model::{
    LeaderboardEntry, Match, MatchStatus, Player, PlayerId, Round, RoundStatus, Score, Team,
};
pub use registry::{Registry, RegistryAction, MAX_ACTIVE_TOURNAMENTS};
pub use schedule::{generate, total_rounds};
pub use tournament::{Tournament, TournamentAction, TournamentProgress, TournamentStatus};
