//! Outputs of a batch ranking pass

use anode_types::CostError;
use serde::{Deserialize, Serialize};

use super::material::BlendKey;

/// One costed sourcing combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub key: BlendKey,
    /// `"code - source"` labels in HS, LS, CTP order
    pub hs_source: String,
    pub ls_source: String,
    pub ctp_source: String,
    pub rro2: f64,
    pub rrco2: f64,
    pub ap: f64,
    pub tc: f64,
    pub nac: f64,
    /// Unit cost, rounded to two decimals
    pub cost: f64,
    /// NAC / cost
    pub ratio: f64,
}

/// Why a combination was left out of the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// No reference record for the blend key
    MetricsNotFound,
    /// Reference record exists but NAC is blank
    MissingNac,
    /// A candidate price could not be read as a number
    InvalidPrice(String),
    /// Cost rounded to zero, so NAC/cost is undefined
    ZeroCost,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::MetricsNotFound => "metrics not found",
            SkipReason::MissingNac => "missing NAC",
            SkipReason::InvalidPrice(_) => "invalid price",
            SkipReason::ZeroCost => "zero cost",
        }
    }
}

impl From<CostError> for SkipReason {
    fn from(err: CostError) -> Self {
        match err {
            CostError::InvalidPriceFormat(raw) => SkipReason::InvalidPrice(raw),
            CostError::DivisionUndefined { .. } => SkipReason::ZeroCost,
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InvalidPrice(raw) => write!(f, "invalid price {:?}", raw),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedCombination {
    pub key: BlendKey,
    pub reason: SkipReason,
}

/// Full outcome of a batch pass: ranked results plus what was dropped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinationEvaluation {
    /// Ordered by NAC/cost in the requested direction
    pub results: Vec<PredictionResult>,
    /// In enumeration order
    pub skipped: Vec<SkippedCombination>,
}

impl CombinationEvaluation {
    /// Combinations examined (kept + skipped)
    pub fn evaluated(&self) -> usize {
        self.results.len() + self.skipped.len()
    }

    pub fn skipped_with(&self, label: &str) -> usize {
        self.skipped
            .iter()
            .filter(|s| s.reason.label() == label)
            .count()
    }
}
