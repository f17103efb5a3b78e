//! SportsData.io NFL integration
//!
//! - `http`: upstream client for players, news, season stats and projections
//! - `types`: wire types for the SportsData payloads
//! - `scoring`: fantasy point computation over season stat lines

pub mod http;
pub mod scoring;
pub mod types;

pub use http::{SportsDataClient, SPORTSDATA_BASE_URL};
pub use scoring::{calculate_fantasy_points, ScoringFormat};
pub use types::{MergedPlayer, NewsItem, Player, PlayerId, Season, Seasons, StatLine};
