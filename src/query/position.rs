//! Position filters, including the FLEX/SUPERFLEX roster slots.

use std::fmt;

/// Positions eligible for a FLEX slot.
pub const FLEX_POSITIONS: [&str; 3] = ["RB", "WR", "TE"];

/// Positions eligible for a SUPERFLEX slot.
pub const SUPERFLEX_POSITIONS: [&str; 4] = ["QB", "RB", "WR", "TE"];

/// Punters and offensive linemen never show up on the draft board.
pub const EXCLUDED_POSITIONS: [&str; 4] = ["P", "G", "C", "OL"];

pub fn is_excluded(position: &str) -> bool {
    EXCLUDED_POSITIONS.contains(&position)
}

/// Filter applied to a player's SportsData `Position`.
///
/// Matching is exact and case-sensitive, like SportsData's own codes.
///
/// # Examples
///
/// ```rust
/// use ffl_draft_api::query::PositionFilter;
///
/// let flex = PositionFilter::parse("FLEX").unwrap();
/// assert!(flex.matches("TE"));
/// assert!(!flex.matches("QB"));
/// assert!(PositionFilter::parse("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PositionFilter {
    /// RB, WR or TE
    Flex,
    /// QB, RB, WR or TE
    Superflex,
    Exact(String),
}

impl PositionFilter {
    /// Parse a `positionFilter` query value. An empty value means no filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "FLEX" => Some(PositionFilter::Flex),
            "SUPERFLEX" => Some(PositionFilter::Superflex),
            other => Some(PositionFilter::Exact(other.to_string())),
        }
    }

    /// All real positions this filter accepts.
    pub fn eligible_positions(&self) -> Vec<&str> {
        match self {
            PositionFilter::Flex => FLEX_POSITIONS.to_vec(),
            PositionFilter::Superflex => SUPERFLEX_POSITIONS.to_vec(),
            PositionFilter::Exact(position) => vec![position.as_str()],
        }
    }

    pub fn matches(&self, position: &str) -> bool {
        match self {
            PositionFilter::Flex => FLEX_POSITIONS.contains(&position),
            PositionFilter::Superflex => SUPERFLEX_POSITIONS.contains(&position),
            PositionFilter::Exact(expected) => expected == position,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::Flex => f.write_str("FLEX"),
            PositionFilter::Superflex => f.write_str("SUPERFLEX"),
            PositionFilter::Exact(position) => f.write_str(position),
        }
    }
}
