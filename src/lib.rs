//! Fantasy Football Draft Board API
//!
//! A small HTTP backend that pulls NFL rosters, season stats, projections and
//! player news from SportsData.io, merges them per player, and serves a
//! searchable, sortable, paginated draft board.
//!
//! ## Features
//!
//! - **Player Cache**: roster + last season's stats + next season's projections,
//!   fetched once per process and shared across requests
//! - **Flexible Scoring**: standard, PPR and half-PPR fantasy points
//! - **Draft Board Queries**: name search, position (incl. FLEX/SUPERFLEX) and team
//!   filters, sort by ADP, points or any player column, and pagination
//! - **Player Details**: news plus single-player stats and projections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_draft_api::{query::{process_players, PlayerQuery}, routes::AppState, Seasons};
//! use ffl_draft_api::sportsdata::SportsDataClient;
//! use std::time::Duration;
//!
//! # async fn example() -> ffl_draft_api::Result<()> {
//! let client = SportsDataClient::new(
//!     std::env::var("API_KEY").ok(),
//!     ffl_draft_api::sportsdata::SPORTSDATA_BASE_URL,
//!     Duration::from_secs(30),
//! )?;
//! let state = AppState::new(client, Seasons::default());
//!
//! let players = state.cache.get_player_data().await?;
//! let page = process_players(&players, &PlayerQuery::default())?;
//! println!("{} pages", page.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your SportsData.io key (a `.env` file works too):
//! ```bash
//! export API_KEY=your-sportsdata-key
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod query;
pub mod routes;
pub mod sportsdata;

// Re-export commonly used types
pub use error::{FflError, Result};
pub use sportsdata::{MergedPlayer, Player, PlayerId, ScoringFormat, Season, Seasons, StatLine};

pub const API_KEY_ENV_VAR: &str = "API_KEY";
