//! Process-scoped player cache
//!
//! Holds the merged player list (roster + stats + projections). The list is
//! built once, on first access, and then served unchanged until the process
//! exits. Population goes through a `OnceCell`, so concurrent first requests
//! share one upstream fetch; a failed fetch leaves the cell empty and the next
//! caller tries again.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use crate::sportsdata::{MergedPlayer, Player, PlayerId, Seasons, SportsDataClient, StatLine};
use crate::Result;


pub struct PlayerCache {
    client: SportsDataClient,
    seasons: Seasons,
    players: OnceCell<Arc<Vec<MergedPlayer>>>,
}

impl PlayerCache {
    pub fn new(client: SportsDataClient, seasons: Seasons) -> Self {
        Self {
            client,
            seasons,
            players: OnceCell::new(),
        }
    }

    /// Return the merged player list, fetching it from SportsData on first use.
    pub async fn get_player_data(&self) -> Result<Arc<Vec<MergedPlayer>>> {
        let players = self.players.get_or_try_init(|| self.populate()).await?;
        Ok(Arc::clone(players))
    }

    pub fn is_populated(&self) -> bool {
        self.players.initialized()
    }

    pub fn seasons(&self) -> Seasons {
        self.seasons
    }

    async fn populate(&self) -> Result<Arc<Vec<MergedPlayer>>> {
        info!(
            stats_season = %self.seasons.stats,
            projections_season = %self.seasons.projections,
            "Fetching and caching player data..."
        );

        let (players, stats, projections) = tokio::try_join!(
            self.client.fetch_all_players(),
            self.client.fetch_all_season_stats(self.seasons.stats),
            self.client.fetch_all_season_projections(self.seasons.projections),
        )?;

        let stat_rows = stats.len();
        let projection_rows = projections.len();
        let merged = merge_players(players, stats, projections);

        info!(
            players = merged.len(),
            stat_rows, projection_rows, "Player cache populated"
        );
        Ok(Arc::new(merged))
    }
}

fn index_by_player(lines: Vec<StatLine>) -> HashMap<PlayerId, StatLine> {
    lines
        .into_iter()
        .filter_map(|line| line.player_id.map(|id| (id, line)))
        .collect()
}

/// Join each player with their stat and projection lines by `PlayerID`.
///
/// Players with no matching line get an empty `StatLine`. When a season list
/// repeats a player, the last row wins.
pub fn merge_players(
    players: Vec<Player>,
    stats: Vec<StatLine>,
    projections: Vec<StatLine>,
) -> Vec<MergedPlayer> {
    let stats_by_id = index_by_player(stats);
    let projections_by_id = index_by_player(projections);

    players
        .into_iter()
        .map(|player| {
            let stats = stats_by_id
                .get(&player.player_id)
                .cloned()
                .unwrap_or_default();
            let projections = projections_by_id
                .get(&player.player_id)
                .cloned()
                .unwrap_or_default();
            MergedPlayer {
                player,
                stats,
                projections,
            }
        })
        .collect()
}
