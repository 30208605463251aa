//! Blended unit cost of an anode batch
//!
//! # Formula
//! ```text
//! adj_hs = hs_pct * (1 - butt) * (1 - ctp)
//! adj_ls = ls_pct * (1 - butt) * (1 - ctp)
//! cost   = (adj_hs/100 * hs_price + adj_ls/100 * ls_price
//!           + ctp_pct/100 * ctp_price + butt_pct/100 * butt_price) / 1000
//! ```
//! rounded to two decimals. In [`CostMode::Legacy`] `butt` and `ctp` are the raw
//! percentage points (30, not 0.30), which makes `(1 - butt)` strongly
//! negative at normal operating shares. Existing reports were produced that
//! way, so it stays the default. [`CostMode::Fractional`] divides both by 100
//! before the `(1 - x)` terms.

use anode_types::{CostError, CostMode};

use crate::model::{parse_price, BlendKey, Composition, MaterialPrices};

/// Unit cost (USD per kg of anode) for the given composition and prices
pub fn compute_unit_cost(composition: &Composition, prices: &MaterialPrices, mode: CostMode) -> f64 {
    let (butt_share, ctp_share) = match mode {
        CostMode::Legacy => (composition.butt_pct, composition.ctp_pct),
        CostMode::Fractional => (composition.butt_pct / 100.0, composition.ctp_pct / 100.0),
    };

    let adj_hs = composition.hs_pct * (1.0 - butt_share) * (1.0 - ctp_share);
    let adj_ls = composition.ls_pct * (1.0 - butt_share) * (1.0 - ctp_share);

    let cost = ((adj_hs / 100.0) * prices.hs
        + (adj_ls / 100.0) * prices.ls
        + (composition.ctp_pct / 100.0) * prices.ctp
        + (composition.butt_pct / 100.0) * prices.butt)
        / 1000.0;

    round2(cost)
}

/// Same as [`compute_unit_cost`] with prices given as text, as typed into a form
pub fn compute_unit_cost_from_text(
    composition: &Composition,
    hs_price: &str,
    ls_price: &str,
    ctp_price: &str,
    butt_price: &str,
    mode: CostMode,
) -> Result<f64, CostError> {
    let prices = MaterialPrices::new(
        parse_price(hs_price)?,
        parse_price(ls_price)?,
        parse_price(ctp_price)?,
        parse_price(butt_price)?,
    );
    Ok(compute_unit_cost(composition, &prices, mode))
}

/// NAC divided by cost. Zero cost has no ratio.
pub fn efficiency_ratio(nac: f64, cost: f64, key: &BlendKey) -> Result<f64, CostError> {
    if cost == 0.0 {
        return Err(CostError::DivisionUndefined { key: key.lot() });
    }
    Ok(nac / cost)
}

/// Round to two decimals on the exact binary value (ties to even)
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}
