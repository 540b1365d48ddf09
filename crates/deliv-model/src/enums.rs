//! Query-key vocabularies for the aggregation layer.
//!
//! Closed sets are enums rather than loose strings or booleans, so a
//! bad key fails at the call site instead of producing an empty result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DelivError;

/// City categories the ranking views report on, in display order.
///
/// Cities absent from a filtered dataset yield an empty slice in ranked
/// outputs, not an error.
pub const REPORT_CITIES: [&str; 3] = ["Metropolitan", "Urban", "Semi-Urban"];

/// Festival-day flag as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FestivalFlag {
    Yes,
    No,
}

impl FestivalFlag {
    /// The flag's literal value in the cleaned table.
    pub fn as_str(&self) -> &'static str {
        match self {
            FestivalFlag::Yes => "Yes",
            FestivalFlag::No => "No",
        }
    }
}

impl fmt::Display for FestivalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FestivalFlag {
    type Err = DelivError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Yes" => Ok(FestivalFlag::Yes),
            "No" => Ok(FestivalFlag::No),
            other => Err(DelivError::Message(format!(
                "unknown festival flag {other:?} (expected Yes or No)"
            ))),
        }
    }
}

/// Which delivery-time statistic a scalar query extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeStat {
    Mean,
    StdDev,
}

/// Ranking direction for the per-city courier leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankOrder {
    /// Lowest mean delivery time first.
    Fastest,
    /// Highest mean delivery time first.
    Slowest,
}
