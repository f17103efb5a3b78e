use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::query::{
    process_players, PlayerPage, PlayerQuery, PositionFilter, SortDirection, SortKey,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
use crate::routes::{response::ApiResponse, AppState};
use crate::sportsdata::{NewsItem, PlayerId, ScoringFormat, StatLine};
use crate::{FflError, Result};

// Query parameters for the draft board
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPlayersQuery {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    position_filter: String,
    #[serde(default)]
    team_filter: String,
    #[serde(default = "default_scoring_format")]
    scoring_format: String,
    #[serde(default = "default_sort_key")]
    sort_key: String,
    #[serde(default = "default_sort_direction")]
    sort_direction: String,
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_scoring_format() -> String {
    "ppr".to_string()
}

fn default_sort_key() -> String {
    "adp".to_string()
}

fn default_sort_direction() -> String {
    "ascending".to_string()
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl From<ListPlayersQuery> for PlayerQuery {
    fn from(params: ListPlayersQuery) -> Self {
        PlayerQuery {
            search_term: params.search_term,
            position_filter: PositionFilter::parse(&params.position_filter),
            team_filter: Some(params.team_filter).filter(|team| !team.is_empty()),
            scoring_format: ScoringFormat::from(params.scoring_format.as_str()),
            sort_key: SortKey::from(params.sort_key.as_str()),
            sort_direction: SortDirection::from(params.sort_direction.as_str()),
            page: params.page,
            limit: params.limit,
        }
    }
}

// GET /api/players - Search, filter, sort and page the draft board
pub async fn get_players(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListPlayersQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<PlayerPage>>> {
    let Query(params) = params.map_err(|rejection| FflError::InvalidQuery {
        message: rejection.body_text(),
    })?;
    let query = PlayerQuery::from(params);
    // Reject bad paging before the first request can trigger an upstream fetch.
    // `process_players` checks again since it divides by `limit`.
    query.validate()?;

    let players = state.cache.get_player_data().await?;
    let page = tokio::task::spawn_blocking(move || process_players(&players, &query)).await??;

    Ok(ApiResponse::success(page))
}

#[derive(Debug, Serialize)]
pub struct PlayerDetails {
    pub news: Vec<NewsItem>,
    pub stats: Option<StatLine>,
    pub projections: Option<StatLine>,
}

// GET /api/player/{id} - News, season stats and projections for one player
pub async fn get_player_details(
    State(state): State<AppState>,
    player_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<PlayerDetails>>> {
    let Path(player_id) = player_id.map_err(|rejection| FflError::InvalidQuery {
        message: rejection.body_text(),
    })?;
    if player_id < 1 {
        return Err(FflError::InvalidQuery {
            message: "player id must be positive".to_string(),
        });
    }
    let player_id = PlayerId::new(player_id);
    let seasons = state.cache.seasons();

    let (news, stats, projections) = tokio::try_join!(
        state.client.fetch_player_news(player_id),
        state.client.fetch_player_season_stats(player_id, seasons.stats),
        state
            .client
            .fetch_player_season_projections(player_id, seasons.projections),
    )?;

    Ok(ApiResponse::success(PlayerDetails {
        news,
        stats,
        projections,
    }))
}
