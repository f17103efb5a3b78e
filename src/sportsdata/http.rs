//! HTTP client for the SportsData.io NFL v3 API

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::sportsdata::types::{NewsItem, Player, PlayerId, Season, StatLine};
use crate::{FflError, Result, API_KEY_ENV_VAR};


/// Base path for the SportsData.io NFL v3 API.
pub const SPORTSDATA_BASE_URL: &str = "https://api.sportsdata.io/v3/nfl";

/// Thin wrapper over `reqwest::Client` that knows the SportsData routes
/// and appends the access key to every request.
#[derive(Debug, Clone)]
pub struct SportsDataClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SportsDataClient {
    /// Build a client against `base_url`. A missing `api_key` is not an error
    /// here; each fetch fails with [`FflError::MissingApiKey`] instead.
    pub fn new(api_key: Option<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ffl-draft-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// All players on the SportsData roster list.
    pub async fn fetch_all_players(&self) -> Result<Vec<Player>> {
        self.get_list("scores/json/Players").await
    }

    /// Season stat lines for every player in `season`.
    pub async fn fetch_all_season_stats(&self, season: Season) -> Result<Vec<StatLine>> {
        self.get_list(&format!("stats/json/PlayerSeasonStats/{season}"))
            .await
    }

    /// Season projections for every player in `season`.
    pub async fn fetch_all_season_projections(&self, season: Season) -> Result<Vec<StatLine>> {
        self.get_list(&format!(
            "projections/json/PlayerSeasonProjectionStats/{season}"
        ))
        .await
    }

    /// Recent news for one player.
    pub async fn fetch_player_news(&self, player_id: PlayerId) -> Result<Vec<NewsItem>> {
        self.get_list(&format!("scores/json/NewsByPlayerID/{player_id}"))
            .await
    }

    /// One player's stat line for `season`, if SportsData has one.
    ///
    /// A 404 or an empty body means the player has no row (rookies, for one).
    pub async fn fetch_player_season_stats(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Option<StatLine>> {
        let body = self
            .get_optional_json(&format!("stats/json/PlayerSeasonStats/{season}/{player_id}"))
            .await?;
        pick_player_record(body, player_id)
    }

    /// One player's projection line for `season`, if SportsData has one.
    pub async fn fetch_player_season_projections(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Option<StatLine>> {
        let body = self
            .get_optional_json(&format!(
                "projections/json/PlayerSeasonProjectionStats/{season}/{player_id}"
            ))
            .await?;
        pick_player_record(body, player_id)
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| FflError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })
    }

    /// GET a JSON array; a `null` body decodes as an empty list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let list: Option<Vec<T>> = self.get_json(path).await?;
        Ok(list.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.get_bytes(path).await?;
        decode_body(path, &bytes)
    }

    /// GET a single-record body; a 404 or blank body comes back as `null`.
    async fn get_optional_json(&self, path: &str) -> Result<Value> {
        match self.get_bytes(path).await {
            Err(FflError::Upstream(err)) if err.status() == Some(StatusCode::NOT_FOUND) => {
                debug!(path, "SportsData has no record");
                Ok(Value::Null)
            }
            Err(err) => Err(err),
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Value::Null),
            Ok(bytes) => decode_body(path, &bytes),
        }
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let key = self.api_key()?;
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "SportsData request");

        // Strip the URL from transport errors so the key never reaches logs or clients.
        let response = self
            .client
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|err| {
                let err = err.without_url();
                if err.status() == Some(StatusCode::NOT_FOUND) {
                    debug!(%url, "SportsData returned 404");
                } else {
                    warn!(%url, error = %err, "SportsData request failed");
                }
                FflError::Upstream(err)
            })?;

        let bytes = response.bytes().await.map_err(|err| {
            let err = err.without_url();
            warn!(%url, error = %err, "Failed reading SportsData response body");
            FflError::Upstream(err)
        })?;

        Ok(bytes.to_vec())
    }
}

fn decode_body<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|err| {
        warn!(path, error = %err, "SportsData returned malformed JSON");
        FflError::Decode(err)
    })
}

/// Single-player endpoints answer with an object, a one-element array or `null`.
fn pick_player_record(body: Value, player_id: PlayerId) -> Result<Option<StatLine>> {
    match body {
        Value::Null => Ok(None),
        Value::Array(items) => {
            for item in items {
                let line: StatLine = serde_json::from_value(item)?;
                if line.player_id == Some(player_id) {
                    return Ok(Some(line));
                }
            }
            Ok(None)
        }
        other => {
            let line: StatLine = serde_json::from_value(other)?;
            Ok((!line.is_empty()).then_some(line))
        }
    }
}
