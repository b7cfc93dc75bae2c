//! Americano Server - HTTP API for tournament organizers
//!
//! This crate provides a stateless JSON facade over the core:
//! - Schedule generation
//! - Leaderboard calculation
//! - Tournament creation and action application
//!
//! Every response is computed from the request body alone; the server keeps
//! no tournament data between requests.

mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8002 }
    }
}

/// Create the router with all routes
pub fn create_router() -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Core operations
        .route("/api/schedule", post(routes::schedule::generate_schedule))
        .route(
            "/api/leaderboard",
            post(routes::leaderboard::calculate_leaderboard),
        )
        // Tournament API
        .route(
            "/api/tournament",
            post(routes::tournament::create_tournament),
        )
        .route(
            "/api/tournament/apply",
            post(routes::tournament::apply_action),
        )
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router();

    tracing::info!("Americano Server starting on http://0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
