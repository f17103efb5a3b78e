use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sportsdata::types::StatLine;


/// League scoring format used to pick between SportsData's precomputed point columns.
///
/// Parsing never fails: unknown selectors fall back to PPR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScoringFormat {
    Standard,
    #[default]
    Ppr,
    HalfPpr,
}

impl ScoringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringFormat::Standard => "std",
            ScoringFormat::Ppr => "ppr",
            ScoringFormat::HalfPpr => "half_ppr",
        }
    }
}

impl From<&str> for ScoringFormat {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "std" | "standard" => ScoringFormat::Standard,
            "half_ppr" | "half-ppr" | "halfppr" => ScoringFormat::HalfPpr,
            _ => ScoringFormat::Ppr,
        }
    }
}

impl From<String> for ScoringFormat {
    fn from(s: String) -> Self {
        ScoringFormat::from(s.as_str())
    }
}

impl From<ScoringFormat> for String {
    fn from(format: ScoringFormat) -> Self {
        format.as_str().to_string()
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fantasy points for one stat line under `format`.
///
/// Missing standard points count as 0; missing (or zero) PPR points fall back
/// to the standard value. Half-PPR is the mean of the two.
pub fn calculate_fantasy_points(record: &StatLine, format: ScoringFormat) -> f64 {
    if record.is_empty() {
        return 0.0;
    }

    let standard_points = record.fantasy_points.unwrap_or(0.0);
    let ppr_points = record
        .fantasy_points_ppr
        .filter(|points| *points != 0.0)
        .unwrap_or(standard_points);

    match format {
        ScoringFormat::Standard => standard_points,
        ScoringFormat::Ppr => ppr_points,
        ScoringFormat::HalfPpr => (standard_points + ppr_points) / 2.0,
    }
}
