use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// SportsData sends explicit `null` for some string columns; treat it as empty.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Type-safe wrapper for SportsData `PlayerID` values.
///
/// # Examples
///
/// ```rust
/// use ffl_draft_api::PlayerId;
///
/// let id = PlayerId::new(19801);
/// assert_eq!(id.as_i64(), 19801);
/// assert_eq!(id.to_string(), "19801");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NFL season year as used in SportsData URL paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Which seasons back the cached stats and projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seasons {
    /// Season of completed stats (`PlayerSeasonStats`).
    pub stats: Season,
    /// Season of projections (`PlayerSeasonProjectionStats`).
    pub projections: Season,
}

impl Default for Seasons {
    fn default() -> Self {
        Self {
            stats: Season::new(2024),
            projections: Season::new(2025),
        }
    }
}

/// Roster entry from `scores/json/Players`.
///
/// Only the columns the API filters and sorts on are typed; everything else
/// SportsData sends is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    #[serde(rename = "PlayerID")]
    pub player_id: PlayerId,
    #[serde(rename = "Name", default, deserialize_with = "de_null_as_default")]
    pub name: String,
    #[serde(rename = "Position", default, deserialize_with = "de_null_as_default")]
    pub position: String,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "AverageDraftPosition", default)]
    pub average_draft_position: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    /// Look up a raw attribute by its SportsData column name.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        match key {
            "PlayerID" => Some(Value::from(self.player_id.as_i64())),
            "Name" => Some(Value::from(self.name.clone())),
            "Position" => Some(Value::from(self.position.clone())),
            "Team" => self.team.clone().map(Value::from),
            "AverageDraftPosition" => self.average_draft_position.map(Value::from),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// One player's season stat line, used for both actual stats and projections.
///
/// An empty `StatLine` (`{}`) stands in for players SportsData has no row for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatLine {
    #[serde(rename = "PlayerID", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "Season", default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    /// Standard scoring fantasy points
    #[serde(rename = "FantasyPoints", default, skip_serializing_if = "Option::is_none")]
    pub fantasy_points: Option<f64>,
    /// Points-per-reception fantasy points
    #[serde(rename = "FantasyPointsPPR", default, skip_serializing_if = "Option::is_none")]
    pub fantasy_points_ppr: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatLine {
    pub fn is_empty(&self) -> bool {
        self.player_id.is_none()
            && self.season.is_none()
            && self.fantasy_points.is_none()
            && self.fantasy_points_ppr.is_none()
            && self.extra.is_empty()
    }
}

/// News article from `scores/json/NewsByPlayerID`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
    #[serde(rename = "NewsID", default, skip_serializing_if = "Option::is_none")]
    pub news_id: Option<i64>,
    #[serde(rename = "PlayerID", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Updated", default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A player joined with their season stats and projections.
///
/// Serializes flat: the player's own columns plus `Stats` and `Projections`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MergedPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(rename = "Stats", default)]
    pub stats: StatLine,
    #[serde(rename = "Projections", default)]
    pub projections: StatLine,
}
