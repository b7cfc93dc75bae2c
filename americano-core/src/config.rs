//! Tournament settings
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Allowed court counts
pub const COURTS_RANGE: (u32, u32) = (1, 10);
/// Allowed match durations in minutes
pub const MATCH_DURATION_RANGE: (u32, u32) = (10, 60);
/// Allowed break durations in minutes
pub const BREAK_DURATION_RANGE: (u32, u32) = (0, 30);

/// Organizer-supplied settings for a new tournament
///
/// `courts` is informational: generated matches are numbered 1..=k within
/// each round regardless of this value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    pub name: String,
    pub courts: u32,
    /// Minutes per match
    pub match_duration: u32,
    /// Minutes between rounds
    pub break_duration: u32,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            courts: 2,
            match_duration: 15,
            break_duration: 5,
        }
    }
}

impl TournamentSettings {
    /// Default settings with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set court count
    pub fn with_courts(mut self, courts: u32) -> Self {
        self.courts = courts;
        self
    }

    /// Set match and break durations
    pub fn with_durations(mut self, match_duration: u32, break_duration: u32) -> Self {
        self.match_duration = match_duration;
        self.break_duration = break_duration;
        self
    }

    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if !in_range(self.courts, COURTS_RANGE) {
            return Err(TournamentError::CourtsOutOfRange(self.courts));
        }
        check_duration("Match duration", self.match_duration, MATCH_DURATION_RANGE)?;
        check_duration("Break duration", self.break_duration, BREAK_DURATION_RANGE)?;
        Ok(())
    }
}

fn in_range(value: u32, (min, max): (u32, u32)) -> bool {
    (min..=max).contains(&value)
}

fn check_duration(field: &'static str, value: u32, range: (u32, u32)) -> Result<(), TournamentError> {
    if in_range(value, range) {
        Ok(())
    } else {
        Err(TournamentError::DurationOutOfRange {
            field,
            min: range.0,
            max: range.1,
            value,
        })
    }
}
