//! Core types for anode cost prediction

mod error;

pub use error::*;

use serde::{Deserialize, Serialize};

/// How the butt and CTP shares enter the adjusted CPC percentages.
///
/// `Legacy` subtracts the raw percentage points from one, reproducing the
/// numbers the existing dashboard reports. `Fractional` converts them to
/// fractions first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    #[default]
    Legacy,
    Fractional,
}

impl std::fmt::Display for CostMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostMode::Legacy => write!(f, "legacy"),
            CostMode::Fractional => write!(f, "fractional"),
        }
    }
}

/// Direction used when ranking combinations by NAC/cost.
///
/// `Descending` (highest ratio first) is the legacy direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankOrder {
    #[default]
    Descending,
    Ascending,
}

impl std::fmt::Display for RankOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankOrder::Descending => write!(f, "descending"),
            RankOrder::Ascending => write!(f, "ascending"),
        }
    }
}
