//! HTTP surface: axum router, handlers and response envelopes.

pub mod health;
pub mod players;
pub mod response;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::cache::PlayerCache;
use crate::config::ServerConfig;
use crate::sportsdata::{Seasons, SportsDataClient};
use crate::Result;


/// Shared handler state: the upstream client plus the process-wide player cache.
#[derive(Clone)]
pub struct AppState {
    pub client: SportsDataClient,
    pub cache: Arc<PlayerCache>,
}

impl AppState {
    pub fn new(client: SportsDataClient, seasons: Seasons) -> Self {
        let cache = Arc::new(PlayerCache::new(client.clone(), seasons));
        Self { client, cache }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self::new(config.sportsdata_client()?, config.seasons()))
    }
}

pub fn router(state: AppState) -> Router {
    // Draft board frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(|| async { concat!("Fantasy Draft Board API - v", env!("CARGO_PKG_VERSION")) }),
        )
        .route("/health", get(health::health_check))
        .route("/api/players", get(players::get_players))
        .route("/api/player/{id}", get(players::get_player_details))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
