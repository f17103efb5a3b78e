use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::{response::ApiResponse, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub cache_populated: bool,
    pub api_key_configured: bool,
}

// GET /health - Liveness plus whether the player cache is warm
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    ApiResponse::success(HealthStatus {
        cache_populated: state.cache.is_populated(),
        api_key_configured: state.client.has_api_key(),
    })
}
