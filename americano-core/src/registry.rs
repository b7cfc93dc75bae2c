//! The set of tournaments one organizer manages

use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::tournament::Tournament;

/// Running tournaments allowed at once
pub const MAX_ACTIVE_TOURNAMENTS: usize = 3;

/// A change to the registry
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryAction {
    Add(Tournament),
    /// Replace the tournament with the same id
    Update(Tournament),
    Delete(String),
}

/// Organizer's tournaments in creation order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub tournaments: Vec<Tournament>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    pub fn apply(&mut self, action: RegistryAction) -> Result<(), TournamentError> {
        match action {
            RegistryAction::Add(tournament) => {
                if self.get(&tournament.id).is_some() {
                    return Err(TournamentError::DuplicateTournament(tournament.id));
                }
                if tournament.status.is_running() && self.active().count() >= MAX_ACTIVE_TOURNAMENTS {
                    return Err(TournamentError::TooManyActive(MAX_ACTIVE_TOURNAMENTS));
                }
                tracing::info!("Registered tournament {} ({})", tournament.name(), tournament.id);
                self.tournaments.push(tournament);
            }
            RegistryAction::Update(tournament) => {
                let pos = self
                    .tournaments
                    .iter()
                    .position(|t| t.id == tournament.id)
                    .ok_or_else(|| TournamentError::UnknownTournament(tournament.id.clone()))?;
                let reopening =
                    tournament.status.is_running() && !self.tournaments[pos].status.is_running();
                if reopening && self.active().count() >= MAX_ACTIVE_TOURNAMENTS {
                    return Err(TournamentError::TooManyActive(MAX_ACTIVE_TOURNAMENTS));
                }
                self.tournaments[pos] = tournament;
            }
            RegistryAction::Delete(id) => {
                let pos = self
                    .tournaments
                    .iter()
                    .position(|t| t.id == id)
                    .ok_or(TournamentError::UnknownTournament(id))?;
                self.tournaments.remove(pos);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    /// Tournaments still accepting players or being played
    pub fn active(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.iter().filter(|t| t.status.is_running())
    }

    /// Players across running tournaments
    pub fn active_players(&self) -> usize {
        self.active().map(|t| t.players.len()).sum()
    }

    /// Rounds across running tournaments
    pub fn active_rounds(&self) -> usize {
        self.active().map(|t| t.schedule.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TournamentSettings;
    use crate::tournament::TournamentStatus;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tournament(id: &str) -> Tournament {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        Tournament::with_id(id, TournamentSettings::named(format!("Cup {}", id)), &mut rng).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = Registry::new();
        registry.apply(RegistryAction::Add(tournament("a"))).unwrap();

        assert_eq!(registry.get("a").unwrap().name(), "Cup a");
        assert!(registry.get("b").is_none());
    }

    #[test]
    fn test_active_limit() {
        let mut registry = Registry::new();
        for id in ["a", "b", "c"] {
            registry.apply(RegistryAction::Add(tournament(id))).unwrap();
        }

        assert_eq!(
            registry.apply(RegistryAction::Add(tournament("d"))),
            Err(TournamentError::TooManyActive(MAX_ACTIVE_TOURNAMENTS))
        );
        assert_eq!(registry.active().count(), 3);
    }

    #[test]
    fn test_completed_tournaments_free_a_slot() {
        let mut registry = Registry::new();
        for id in ["a", "b", "c"] {
            registry.apply(RegistryAction::Add(tournament(id))).unwrap();
        }

        let mut done = registry.get("b").unwrap().clone();
        done.status = TournamentStatus::Completed;
        registry.apply(RegistryAction::Update(done)).unwrap();

        registry.apply(RegistryAction::Add(tournament("d"))).unwrap();
        assert_eq!(registry.tournaments.len(), 4);
        assert_eq!(registry.active().count(), 3);
    }

    #[test]
    fn test_reopening_respects_active_limit() {
        let mut registry = Registry::new();
        let mut done = tournament("old");
        done.status = TournamentStatus::Completed;
        registry.apply(RegistryAction::Add(done.clone())).unwrap();
        for id in ["a", "b", "c"] {
            registry.apply(RegistryAction::Add(tournament(id))).unwrap();
        }

        done.status = TournamentStatus::InProgress;
        assert_eq!(
            registry.apply(RegistryAction::Update(done)),
            Err(TournamentError::TooManyActive(MAX_ACTIVE_TOURNAMENTS))
        );
        assert_eq!(registry.get("old").unwrap().status, TournamentStatus::Completed);
        assert_eq!(registry.active().count(), 3);

        // Running tournaments can still be updated in place
        let mut a = registry.get("a").unwrap().clone();
        a.status = TournamentStatus::InProgress;
        registry.apply(RegistryAction::Update(a)).unwrap();
        assert_eq!(registry.get("a").unwrap().status, TournamentStatus::InProgress);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = Registry::new();
        registry.apply(RegistryAction::Add(tournament("a"))).unwrap();
        assert_eq!(
            registry.apply(RegistryAction::Add(tournament("a"))),
            Err(TournamentError::DuplicateTournament("a".into()))
        );
    }

    #[test]
    fn test_update_and_delete_unknown() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.apply(RegistryAction::Update(tournament("x"))),
            Err(TournamentError::UnknownTournament("x".into()))
        );
        assert_eq!(
            registry.apply(RegistryAction::Delete("x".into())),
            Err(TournamentError::UnknownTournament("x".into()))
        );
    }

    #[test]
    fn test_delete_and_totals() {
        let mut registry = Registry::new();
        let mut a = tournament("a");
        for name in ["Ann", "Bob", "Cid", "Dee"] {
            a.add_player(name).unwrap();
        }
        a.apply(crate::tournament::TournamentAction::GenerateSchedule).unwrap();
        registry.apply(RegistryAction::Add(a)).unwrap();
        registry.apply(RegistryAction::Add(tournament("b"))).unwrap();

        assert_eq!(registry.active_players(), 4);
        assert_eq!(registry.active_rounds(), 2);

        registry.apply(RegistryAction::Delete("a".into())).unwrap();
        assert_eq!(registry.tournaments.len(), 1);
        assert_eq!(registry.active_players(), 0);
    }
}
