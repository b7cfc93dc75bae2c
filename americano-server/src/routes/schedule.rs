//! Schedule generation endpoint

use americano_core::{Player, Round};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{unprocessable, ApiError};

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub players: Vec<Player>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub rounds: Vec<Round>,
}

/// Generate a schedule for the posted roster
pub async fn generate_schedule(
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let rounds = americano_core::generate(&req.players).map_err(|e| {
        tracing::warn!("Schedule rejected: {}", e);
        unprocessable(e)
    })?;
    Ok(Json(ScheduleResponse { rounds }))
}
