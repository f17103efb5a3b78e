//! Entry point: load config, warm the player cache and serve the API.

use anyhow::Context;
use clap::Parser;
use ffl_draft_api::{
    config::ServerConfig,
    routes::{router, AppState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let state = AppState::from_config(&config).context("Failed to build SportsData client")?;

    if !state.client.has_api_key() {
        tracing::warn!(
            "{} is not set; upstream requests will fail until it is configured",
            ffl_draft_api::API_KEY_ENV_VAR
        );
    }

    if !config.no_warm_cache {
        // A failed warm-up is retried on the first /api/players request
        if let Err(err) = state.cache.get_player_data().await {
            tracing::warn!(error = %err, "Player cache warm-up failed");
        }
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
