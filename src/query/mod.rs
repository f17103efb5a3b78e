//! Draft board query processing
//!
//! Turns the cached merged player list into one page of results:
//! 1. rescore stats and projections for the requested scoring format
//! 2. filter by name search, position and team
//! 3. drop kicking/line positions that never belong on the board
//! 4. sort, then paginate

pub mod position;
pub mod sort;

use rayon::prelude::*;
use serde::Serialize;

use crate::sportsdata::{calculate_fantasy_points, MergedPlayer, ScoringFormat};
use crate::{FflError, Result};

pub use position::{is_excluded, PositionFilter, EXCLUDED_POSITIONS};
pub use sort::{sort_players, SortDirection, SortKey, SortValue, UNRANKED_ADP};


/// Scale applied to recomputed season-stat points (projections are left as is).
pub const STATS_POINTS_MULTIPLIER: f64 = 2.44;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 100;

/// Parsed, validated list request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerQuery {
    /// Case-insensitive substring of the player name; empty matches everyone.
    pub search_term: String,
    pub position_filter: Option<PositionFilter>,
    pub team_filter: Option<String>,
    pub scoring_format: ScoringFormat,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
}

impl Default for PlayerQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            position_filter: None,
            team_filter: None,
            scoring_format: ScoringFormat::Ppr,
            sort_key: SortKey::Adp,
            sort_direction: SortDirection::Ascending,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PlayerQuery {
    /// Reject page/limit values that cannot address a page.
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(FflError::InvalidQuery {
                message: "page must be at least 1".to_string(),
            });
        }
        if self.limit < 1 {
            return Err(FflError::InvalidQuery {
                message: "limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn matches(&self, record: &MergedPlayer) -> bool {
        let player = &record.player;

        if !self.search_term.is_empty()
            && !player
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
        {
            return false;
        }
        if let Some(filter) = &self.position_filter {
            if !filter.matches(&player.position) {
                return false;
            }
        }
        if let Some(team) = &self.team_filter {
            if player.team.as_deref() != Some(team.as_str()) {
                return false;
            }
        }
        !is_excluded(&player.position)
    }
}

/// One page of the draft board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPage {
    pub players: Vec<MergedPlayer>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Copy of `record` with `FantasyPoints` recomputed for `format`.
pub fn rescore(record: &MergedPlayer, format: ScoringFormat) -> MergedPlayer {
    let mut rescored = record.clone();
    rescored.stats.fantasy_points =
        Some(calculate_fantasy_points(&record.stats, format) * STATS_POINTS_MULTIPLIER);
    rescored.projections.fantasy_points =
        Some(calculate_fantasy_points(&record.projections, format));
    rescored
}

/// Run `query` over the cached player list.
pub fn process_players(records: &[MergedPlayer], query: &PlayerQuery) -> Result<PlayerPage> {
    query.validate()?;

    let rescored: Vec<MergedPlayer> = records
        .par_iter()
        .filter(|record| query.matches(record))
        .map(|record| rescore(record, query.scoring_format))
        .collect();

    let sorted = sort_players(rescored, &query.sort_key, query.sort_direction);
    Ok(paginate(sorted, query.page, query.limit))
}

/// Slice out page `page` (1-based) of `limit` records. `limit` must be non-zero.
pub fn paginate(records: Vec<MergedPlayer>, page: usize, limit: usize) -> PlayerPage {
    let total_pages = records.len().div_ceil(limit);
    let start = page.saturating_sub(1).saturating_mul(limit);

    PlayerPage {
        players: records.into_iter().skip(start).take(limit).collect(),
        total_pages,
    }
}
