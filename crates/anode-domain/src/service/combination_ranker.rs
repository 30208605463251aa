//! Cross-product enumeration and NAC/cost ranking of sourcing combinations

use anode_types::{CostMode, RankOrder};
use serde::{Deserialize, Serialize};

use super::cost_calculator::{compute_unit_cost, efficiency_ratio};
use super::metric_lookup::lookup_metrics;
use crate::model::{
    check_price, BlendKey, CandidateRow, CombinationEvaluation, Composition, MaterialPrices, PredictionResult,
    ReferenceStore, SkipReason, SkippedCombination,
};

/// Switches that change the numbers a ranking pass produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    pub cost_mode: CostMode,
    pub rank_order: RankOrder,
}

/// Evaluate every HS x LS x CTP combination.
///
/// Combinations without reference metrics, with a blank NAC, with an
/// unreadable candidate or butt price or with a zero cost are recorded in `skipped`
/// and never abort the pass. Results are sorted by NAC/cost; ties keep
/// enumeration order (HS outer, LS middle, CTP inner).
pub fn evaluate_combinations(
    hs_candidates: &[CandidateRow],
    ls_candidates: &[CandidateRow],
    ctp_candidates: &[CandidateRow],
    composition: &Composition,
    butt_price: f64,
    store: &ReferenceStore,
    options: RankingOptions,
) -> CombinationEvaluation {
    let mut evaluation = CombinationEvaluation::default();

    for hs in hs_candidates {
        for ls in ls_candidates {
            for ctp in ctp_candidates {
                let key = BlendKey::new(hs.lot, ls.lot, ctp.lot);
                match evaluate_one(&key, [hs, ls, ctp], composition, butt_price, store, options.cost_mode) {
                    Ok(result) => evaluation.results.push(result),
                    Err(reason) => {
                        tracing::debug!(lot = %key, %reason, "combination skipped");
                        evaluation.skipped.push(SkippedCombination { key, reason });
                    }
                }
            }
        }
    }

    match options.rank_order {
        RankOrder::Descending => evaluation.results.sort_by(|a, b| b.ratio.total_cmp(&a.ratio)),
        RankOrder::Ascending => evaluation.results.sort_by(|a, b| a.ratio.total_cmp(&b.ratio)),
    }

    tracing::info!(
        evaluated = evaluation.evaluated(),
        kept = evaluation.results.len(),
        skipped = evaluation.skipped.len(),
        "combination ranking finished"
    );

    evaluation
}

/// Ranked results only; see [`evaluate_combinations`] for the skip details
pub fn rank_combinations(
    hs_candidates: &[CandidateRow],
    ls_candidates: &[CandidateRow],
    ctp_candidates: &[CandidateRow],
    composition: &Composition,
    butt_price: f64,
    store: &ReferenceStore,
    options: RankingOptions,
) -> Vec<PredictionResult> {
    evaluate_combinations(
        hs_candidates,
        ls_candidates,
        ctp_candidates,
        composition,
        butt_price,
        store,
        options,
    )
    .results
}

fn evaluate_one(
    key: &BlendKey,
    [hs, ls, ctp]: [&CandidateRow; 3],
    composition: &Composition,
    butt_price: f64,
    store: &ReferenceStore,
    cost_mode: CostMode,
) -> Result<PredictionResult, SkipReason> {
    let metrics = lookup_metrics(store, key).ok_or(SkipReason::MetricsNotFound)?;
    let nac = metrics.nac.ok_or(SkipReason::MissingNac)?;

    let prices = MaterialPrices::new(
        hs.price.value()?,
        ls.price.value()?,
        ctp.price.value()?,
        check_price(butt_price)?,
    );
    let cost = compute_unit_cost(composition, &prices, cost_mode);
    let ratio = efficiency_ratio(nac, cost, key)?;

    Ok(PredictionResult {
        key: key.clone(),
        hs_source: hs.display_source(),
        ls_source: ls.display_source(),
        ctp_source: ctp.display_source(),
        rro2: metrics.rro2,
        rrco2: metrics.rrco2,
        ap: metrics.ap,
        tc: metrics.tc,
        nac,
        cost,
        ratio,
    })
}
