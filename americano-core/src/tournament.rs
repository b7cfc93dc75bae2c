//! Tournament state and the actions that change it
//!
//! A `Tournament` is only mutated through `apply`, one `TournamentAction`
//! at a time. Rejected actions leave the tournament untouched.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TournamentSettings;
use crate::error::TournamentError;
use crate::leaderboard;
use crate::model::{LeaderboardEntry, Match, MatchStatus, Player, PlayerId, Round, Team};
use crate::schedule::{self, PLAYERS_PER_MATCH};

/// Length of the organizer's admin code
pub const ADMIN_CODE_LEN: usize = 6;

const ADMIN_CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Tournament lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Accepting players
    #[default]
    Active,
    /// Schedule generated, matches being played
    InProgress,
    /// Every scheduled match is completed
    Completed,
}

impl TournamentStatus {
    /// Counts toward the registry's active-tournament limit
    pub fn is_running(self) -> bool {
        matches!(self, TournamentStatus::Active | TournamentStatus::InProgress)
    }
}

/// A change requested by the organizer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum TournamentAction {
    AddPlayer {
        name: String,
    },
    RemovePlayer {
        player_id: PlayerId,
    },
    GenerateSchedule,
    UpdateScore {
        round_id: String,
        match_id: String,
        team: Team,
        score: u32,
    },
    CompleteMatch {
        round_id: String,
        match_id: String,
    },
}

/// Completed versus scheduled matches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentProgress {
    pub completed_matches: usize,
    pub total_matches: usize,
}

impl TournamentProgress {
    /// Completed share, 0.0 when nothing is scheduled
    pub fn fraction(&self) -> f32 {
        if self.total_matches == 0 {
            0.0
        } else {
            self.completed_matches as f32 / self.total_matches as f32
        }
    }
}

/// An Americano tournament: settings, roster, and schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    #[serde(flatten)]
    pub settings: TournamentSettings,
    pub admin_code: String,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub schedule: Vec<Round>,
    #[serde(default)]
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    next_player_seq: u64,
}

impl Tournament {
    /// Create a tournament whose id is its creation time in milliseconds
    pub fn new<R: Rng + ?Sized>(settings: TournamentSettings, rng: &mut R) -> Result<Self, TournamentError> {
        let created_at = Utc::now();
        let id = created_at.timestamp_millis().to_string();
        Self::build(id, settings, created_at, rng)
    }

    /// Create a tournament with a caller-chosen id
    pub fn with_id<R: Rng + ?Sized>(
        id: impl Into<String>,
        settings: TournamentSettings,
        rng: &mut R,
    ) -> Result<Self, TournamentError> {
        Self::build(id.into(), settings, Utc::now(), rng)
    }

    fn build<R: Rng + ?Sized>(
        id: String,
        mut settings: TournamentSettings,
        created_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, TournamentError> {
        settings.validate()?;
        settings.name = settings.name.trim().to_string();

        Ok(Self {
            id,
            settings,
            admin_code: generate_admin_code(rng),
            players: Vec::new(),
            schedule: Vec::new(),
            status: TournamentStatus::Active,
            created_at,
            next_player_seq: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn has_schedule(&self) -> bool {
        !self.schedule.is_empty()
    }

    /// Apply one action
    pub fn apply(&mut self, action: TournamentAction) -> Result<(), TournamentError> {
        match action {
            TournamentAction::AddPlayer { name } => {
                self.add_player(&name)?;
            }
            TournamentAction::RemovePlayer { player_id } => self.remove_player(&player_id)?,
            TournamentAction::GenerateSchedule => self.generate_schedule()?,
            TournamentAction::UpdateScore {
                round_id,
                match_id,
                team,
                score,
            } => {
                let m = self.find_match_mut(&round_id, &match_id)?;
                m.score.set(team, score);
                // Editing a completed match reopens it
                m.status = MatchStatus::InProgress;
                self.status = TournamentStatus::InProgress;
            }
            TournamentAction::CompleteMatch { round_id, match_id } => {
                let m = self.find_match_mut(&round_id, &match_id)?;
                m.status = MatchStatus::Completed;
                self.refresh_status();
            }
        }
        Ok(())
    }

    fn refresh_status(&mut self) {
        let progress = self.progress();
        if progress.total_matches > 0 && progress.completed_matches == progress.total_matches {
            self.status = TournamentStatus::Completed;
            tracing::info!("Tournament {}: all {} matches completed", self.id, progress.total_matches);
        }
    }

    /// Register a player and return the assigned id
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }

        let id = loop {
            self.next_player_seq += 1;
            let candidate = format!("player-{}", self.next_player_seq);
            if !self.players.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        tracing::debug!("Tournament {}: added player {} ({})", self.id, name, id);
        self.players.push(Player::new(id.clone(), name));
        Ok(id)
    }

    fn remove_player(&mut self, player_id: &str) -> Result<(), TournamentError> {
        if self.has_schedule() {
            return Err(TournamentError::ScheduleLocked);
        }
        let pos = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::UnknownPlayer(player_id.to_string()))?;
        self.players.remove(pos);
        Ok(())
    }

    fn generate_schedule(&mut self) -> Result<(), TournamentError> {
        if self.has_schedule() {
            return Err(TournamentError::ScheduleExists);
        }
        self.schedule = schedule::generate(&self.players)?;
        self.status = TournamentStatus::InProgress;
        tracing::info!(
            "Tournament {}: schedule generated ({} rounds)",
            self.id,
            self.schedule.len()
        );
        Ok(())
    }

    fn find_match_mut(&mut self, round_id: &str, match_id: &str) -> Result<&mut Match, TournamentError> {
        let round = self
            .schedule
            .iter_mut()
            .find(|r| r.id == round_id)
            .ok_or_else(|| TournamentError::UnknownRound(round_id.to_string()))?;
        round
            .find_match_mut(match_id)
            .ok_or_else(|| TournamentError::UnknownMatch(match_id.to_string()))
    }

    /// Current standings
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::calculate(&self.players, &self.schedule)
    }

    /// Completed and total match counts
    pub fn progress(&self) -> TournamentProgress {
        TournamentProgress {
            completed_matches: self.schedule.iter().map(Round::completed_matches).sum(),
            total_matches: self.schedule.iter().map(|r| r.matches.len()).sum(),
        }
    }

    /// Players still needed before a schedule can be generated
    pub fn players_needed(&self) -> usize {
        let n = self.players.len();
        if n < PLAYERS_PER_MATCH {
            PLAYERS_PER_MATCH - n
        } else {
            (PLAYERS_PER_MATCH - n % PLAYERS_PER_MATCH) % PLAYERS_PER_MATCH
        }
    }
}

/// Random organizer code from `[0-9A-Z]`
pub fn generate_admin_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ADMIN_CODE_LEN)
        .map(|_| ADMIN_CODE_ALPHABET[rng.gen_range(0..ADMIN_CODE_ALPHABET.len())] as char)
        .collect()
}
