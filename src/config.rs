//! Server configuration from CLI flags and environment variables.
//!
//! Every flag falls back to an environment variable, and `main` loads a
//! `.env` file (if present) before parsing.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::sportsdata::{Season, Seasons, SportsDataClient, SPORTSDATA_BASE_URL};
use crate::Result;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "ffl-draft-api",
    version,
    about = "Fantasy football draft board API backed by SportsData.io"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// SportsData.io API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// SportsData NFL API base URL
    #[arg(long, env = "SPORTSDATA_BASE_URL", default_value = SPORTSDATA_BASE_URL)]
    pub base_url: String,

    /// Season whose stats are cached
    #[arg(long, env = "STATS_SEASON", default_value = "2024")]
    pub stats_season: Season,

    /// Season whose projections are cached
    #[arg(long, env = "PROJECTIONS_SEASON", default_value = "2025")]
    pub projections_season: Season,

    /// Upstream request timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Skip fetching player data at startup (fetch on first request instead)
    #[arg(long)]
    pub no_warm_cache: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn seasons(&self) -> Seasons {
        Seasons {
            stats: self.stats_season,
            projections: self.projections_season,
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn sportsdata_client(&self) -> Result<SportsDataClient> {
        SportsDataClient::new(
            self.api_key.clone(),
            &self.base_url,
            self.upstream_timeout(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = ServerConfig::try_parse_from([
            "ffl-draft-api",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--api-key",
            "abc123",
            "--base-url",
            "http://localhost:9000/v3/nfl",
            "--stats-season",
            "2023",
            "--projections-season",
            "2024",
            "--timeout-secs",
            "5",
            "--no-warm-cache",
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.seasons().stats, Season::new(2023));
        assert_eq!(config.seasons().projections, Season::new(2024));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(5));
        assert!(config.no_warm_cache);

        let client = config.sportsdata_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/v3/nfl");
        assert!(client.has_api_key());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(ServerConfig::try_parse_from(["ffl-draft-api", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_invalid_season_rejected() {
        assert!(
            ServerConfig::try_parse_from(["ffl-draft-api", "--stats-season", "last year"])
                .is_err()
        );
    }
}
