//! Error types

use thiserror::Error;

/// Schedule generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Roster size is below 4 or not a multiple of 4
    #[error("Americano format requires multiples of 4 players (got {count})")]
    InvalidRoster { count: usize },
}

/// Rejected tournament or registry actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// Tournament name is blank
    #[error("Tournament name is required")]
    EmptyName,

    /// Court count outside 1-10
    #[error("Courts must be between 1-10 (got {0})")]
    CourtsOutOfRange(u32),

    /// Match or break duration outside its allowed window
    #[error("{field} must be between {min}-{max} minutes (got {value})")]
    DurationOutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// Player name is blank
    #[error("Player name is required")]
    EmptyPlayerName,

    /// Roster is frozen once a schedule exists
    #[error("Cannot remove players after schedule is generated")]
    ScheduleLocked,

    /// Schedule was already generated
    #[error("Schedule has already been generated")]
    ScheduleExists,

    #[error("Player not found: {0}")]
    UnknownPlayer(String),

    #[error("Round not found: {0}")]
    UnknownRound(String),

    #[error("Match not found: {0}")]
    UnknownMatch(String),

    #[error("Tournament not found: {0}")]
    UnknownTournament(String),

    #[error("Tournament already exists: {0}")]
    DuplicateTournament(String),

    /// Registry already holds the maximum number of running tournaments
    #[error("At most {0} tournaments can be active at once")]
    TooManyActive(usize),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
