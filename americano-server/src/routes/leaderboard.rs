//! Leaderboard endpoint

use americano_core::{LeaderboardEntry, Player, Round};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LeaderboardRequest {
    pub players: Vec<Player>,
    #[serde(default, alias = "schedule")]
    pub rounds: Vec<Round>,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// Rank the posted players from the posted rounds
pub async fn calculate_leaderboard(Json(req): Json<LeaderboardRequest>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        entries: americano_core::calculate(&req.players, &req.rounds),
    })
}
