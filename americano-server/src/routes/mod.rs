//! HTTP route handlers

pub mod leaderboard;
pub mod schedule;
pub mod status;
pub mod tournament;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Rejection for a well-formed request the core refused
pub type ApiError = (StatusCode, Json<Value>);

pub fn unprocessable(err: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": err.to_string() })),
    )
}
