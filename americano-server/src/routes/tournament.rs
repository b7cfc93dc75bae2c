//! Tournament API endpoints
//!
//! The caller owns the tournament document: it is posted with each action
//! and the updated document is returned.

use americano_core::{Tournament, TournamentAction, TournamentSettings};
use axum::Json;
use serde::Deserialize;

use super::{unprocessable, ApiError};

/// Create a tournament from settings
pub async fn create_tournament(
    Json(settings): Json<TournamentSettings>,
) -> Result<Json<Tournament>, ApiError> {
    let tournament = Tournament::new(settings, &mut rand::thread_rng()).map_err(unprocessable)?;
    tracing::info!("Created tournament {} ({})", tournament.name(), tournament.id);
    Ok(Json(tournament))
}

/// Apply request
#[derive(Deserialize)]
pub struct ApplyRequest {
    pub tournament: Tournament,
    pub action: TournamentAction,
}

/// Apply one action and return the updated tournament
pub async fn apply_action(Json(req): Json<ApplyRequest>) -> Result<Json<Tournament>, ApiError> {
    let ApplyRequest {
        mut tournament,
        action,
    } = req;

    tournament.apply(action).map_err(|e| {
        tracing::warn!("Tournament {}: action rejected: {}", tournament.id, e);
        unprocessable(e)
    })?;
    Ok(Json(tournament))
}
