//! Sort keys for the player list.

use serde_json::Value;
use std::cmp::Ordering;

use crate::sportsdata::MergedPlayer;

/// Stand-in ADP for undrafted players so they sort after everyone ranked.
pub const UNRANKED_ADP: f64 = 999.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Average draft position
    Adp,
    /// Recomputed season stat points
    Stats,
    /// Recomputed projection points
    Projections,
    /// Any other player column, looked up by its SportsData name
    Attribute(String),
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        match key {
            "adp" => SortKey::Adp,
            "stats" => SortKey::Stats,
            "projections" => SortKey::Projections,
            other => SortKey::Attribute(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl From<&str> for SortDirection {
    /// Only `descending` flips the order; anything else sorts ascending.
    fn from(direction: &str) -> Self {
        if direction == "descending" {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Comparable sort value. Numbers order before text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    /// Convert a raw column value; null, `false`, `0` and `""` collapse to `""`.
    fn from_attribute(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => SortValue::empty(),
            Some(Value::Bool(true)) => SortValue::Number(1.0),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v != 0.0 => SortValue::Number(v),
                _ => SortValue::empty(),
            },
            Some(Value::String(s)) => SortValue::Text(s),
            Some(other) => SortValue::Text(other.to_string()),
        }
    }

    fn empty() -> Self {
        SortValue::Text(String::new())
    }

    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Missing or zero values take `default`.
fn number_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v != 0.0).unwrap_or(default)
}

impl SortKey {
    pub fn value_for(&self, record: &MergedPlayer) -> SortValue {
        match self {
            SortKey::Adp => SortValue::Number(number_or(
                record.player.average_draft_position,
                UNRANKED_ADP,
            )),
            SortKey::Stats => SortValue::Number(number_or(record.stats.fantasy_points, 0.0)),
            SortKey::Projections => {
                SortValue::Number(number_or(record.projections.fantasy_points, 0.0))
            }
            SortKey::Attribute(name) => SortValue::from_attribute(record.player.attribute(name)),
        }
    }
}

/// Stable sort of `records` by `key`. Descending keeps ties in input order.
pub fn sort_players(
    records: Vec<MergedPlayer>,
    key: &SortKey,
    direction: SortDirection,
) -> Vec<MergedPlayer> {
    let mut keyed: Vec<(SortValue, MergedPlayer)> = records
        .into_iter()
        .map(|record| (key.value_for(&record), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Ascending => a.total_cmp(b),
        SortDirection::Descending => b.total_cmp(a),
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}
