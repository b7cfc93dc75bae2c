//! JSON documents read by the command-line and HTTP front ends

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Player, Round};

/// Players plus whatever schedule exists so far
///
/// Accepts full tournament documents too: unknown fields are ignored, and
/// the schedule may be stored as `schedule` or `rounds`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentDocument {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default, alias = "rounds")]
    pub schedule: Vec<Round>,
}

impl TournamentDocument {
    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }
}

/// Parse a roster: a bare array of players, or an object with `players`
pub fn parse_players(content: &str) -> anyhow::Result<Vec<Player>> {
    if let Ok(players) = serde_json::from_str::<Vec<Player>>(content) {
        return Ok(players);
    }

    #[derive(Deserialize)]
    struct Wrapped {
        players: Vec<Player>,
    }

    let wrapped: Wrapped = serde_json::from_str(content)?;
    Ok(wrapped.players)
}

/// Load a roster from a JSON file
pub fn load_players(path: &Path) -> anyhow::Result<Vec<Player>> {
    let content = std::fs::read_to_string(path)?;
    parse_players(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let players = parse_players(r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bob"}]"#).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1], Player::new("2", "Bob"));
    }

    #[test]
    fn test_parse_wrapped() {
        let players = parse_players(r#"{"name":"Cup","players":[{"id":"1","name":"Ann"}]}"#).unwrap();
        assert_eq!(players, vec![Player::new("1", "Ann")]);
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_players(r#"{"teams":[]}"#).is_err());
        assert!(parse_players("not json").is_err());
    }

    #[test]
    fn test_document_accepts_rounds_alias() {
        let doc: TournamentDocument = serde_json::from_str(
            r#"{"players":[{"id":"1","name":"Ann"}],"rounds":[{"id":"round-0","roundNumber":1,"matches":[],"status":"active"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.players.len(), 1);
        assert_eq!(doc.schedule.len(), 1);
        assert_eq!(doc.schedule[0].round_number, 1);
    }
}
