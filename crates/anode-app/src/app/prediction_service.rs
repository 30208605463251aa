//! Prediction Service - single blend costing and batch combination ranking
//!
//! Both use cases take every input as an argument:
//! 1. Validate the composition (when enabled)
//! 2. Resolve reference metrics for the blend key(s)
//! 3. Cost each blend with the configured formula mode
//! 4. Rank batch results by NAC/cost

use std::path::Path;

use anode_domain::model::{
    check_price, BlendKey, CandidateSet, CombinationEvaluation, Composition, MaterialFamily,
    MaterialPrices, ReferenceMetrics, ReferenceStore,
};
use anode_domain::service::{compute_unit_cost, evaluate_combinations, lookup_metrics, RankingOptions};
use anode_types::{CostMode, RankOrder, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::is_known_source;
use crate::repository::{open_candidates, open_reference_store};

/// Options for a prediction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionOptions {
    pub cost_mode: CostMode,
    pub rank_order: RankOrder,
    pub enforce_composition_ranges: bool,
}

impl Default for PredictionOptions {
    fn default() -> Self {
        Self {
            cost_mode: CostMode::Legacy,
            rank_order: RankOrder::Descending,
            enforce_composition_ranges: true,
        }
    }
}

impl PredictionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cost_mode: config.cost_mode,
            rank_order: config.rank_order,
            enforce_composition_ranges: config.enforce_composition_ranges,
        }
    }

    pub fn with_cost_mode(mut self, mode: CostMode) -> Self {
        self.cost_mode = mode;
        self
    }

    pub fn with_rank_order(mut self, order: RankOrder) -> Self {
        self.rank_order = order;
        self
    }

    pub fn with_range_check(mut self, enabled: bool) -> Self {
        self.enforce_composition_ranges = enabled;
        self
    }

    fn ranking(&self) -> RankingOptions {
        RankingOptions {
            cost_mode: self.cost_mode,
            rank_order: self.rank_order,
        }
    }

    fn check(&self, composition: &Composition) -> Result<()> {
        if self.enforce_composition_ranges {
            composition.validate()?;
        }
        Ok(())
    }
}

/// Outcome of costing one selected blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePrediction {
    pub key: BlendKey,
    /// `None` when the reference table has no record for `key`
    pub metrics: Option<ReferenceMetrics>,
    /// USD, rounded to two decimals
    pub cost: f64,
}

impl std::fmt::Display for SinglePrediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Blend:  {}", self.key)?;
        match &self.metrics {
            Some(metrics) => writeln!(f, "{}", metrics)?,
            None => writeln!(f, "No reference metrics for {}", self.key)?,
        }
        write!(f, "Calculated Price: {} USD", self.cost)
    }
}

/// Reference store plus the options every request shares
#[derive(Debug, Clone)]
pub struct PredictionService {
    store: ReferenceStore,
    options: PredictionOptions,
}

impl PredictionService {
    pub fn new(store: ReferenceStore, options: PredictionOptions) -> Self {
        Self { store, options }
    }

    /// Load the reference store named by the config. Fails when it cannot be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = open_reference_store(config)?;
        Ok(Self::new(store, PredictionOptions::from_config(config)))
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn options(&self) -> PredictionOptions {
        self.options
    }

    /// Metrics and cost of one sourcing choice.
    ///
    /// The cost is computed even when no metrics exist for `key`.
    pub fn predict_single(
        &self,
        key: &BlendKey,
        composition: &Composition,
        prices: &MaterialPrices,
    ) -> Result<SinglePrediction> {
        self.options.check(composition)?;
        prices.validate()?;

        for (family, code) in [
            (MaterialFamily::CpcHs, &key.hs),
            (MaterialFamily::CpcLs, &key.ls),
            (MaterialFamily::Ctp, &key.ctp),
        ] {
            if !is_known_source(family, code) {
                tracing::debug!(%family, %code, "source code not in catalog");
            }
        }

        let metrics = lookup_metrics(&self.store, key).cloned();
        if metrics.is_none() {
            tracing::info!(lot = %key, "no reference metrics for selected blend");
        }

        Ok(SinglePrediction {
            key: key.clone(),
            metrics,
            cost: compute_unit_cost(composition, prices, self.options.cost_mode),
        })
    }

    /// [`Self::predict_single`] with prices as typed into the form
    pub fn predict_single_from_text(
        &self,
        key: &BlendKey,
        composition: &Composition,
        [hs, ls, ctp, butt]: [&str; 4],
    ) -> Result<SinglePrediction> {
        let prices = MaterialPrices::parse(hs, ls, ctp, butt)?;
        self.predict_single(key, composition, &prices)
    }

    /// Rank every combination of the candidate set.
    ///
    /// A non-finite or negative butt price fails the whole pass.
    pub fn rank(
        &self,
        candidates: &CandidateSet,
        composition: &Composition,
        butt_price: f64,
    ) -> Result<CombinationEvaluation> {
        self.options.check(composition)?;
        check_price(butt_price)?;

        if candidates.is_empty() {
            tracing::warn!("candidate set is empty, nothing to rank");
        }
        tracing::info!(
            hs = candidates.hs.len(),
            ls = candidates.ls.len(),
            ctp = candidates.ctp.len(),
            combinations = candidates.combination_count(),
            "ranking candidate combinations"
        );

        Ok(evaluate_combinations(
            &candidates.hs,
            &candidates.ls,
            &candidates.ctp,
            composition,
            butt_price,
            &self.store,
            self.options.ranking(),
        ))
    }

    /// Load an uploaded candidate file and rank it
    pub fn rank_file(
        &self,
        path: &Path,
        config: &Config,
        composition: &Composition,
        butt_price: f64,
    ) -> Result<CombinationEvaluation> {
        let candidates = open_candidates(path, config)?;
        self.rank(&candidates, composition, butt_price)
    }
}
