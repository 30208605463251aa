//! Blend composition, unit prices and price parsing

use std::ops::RangeInclusive;

use anode_types::{CostError, Error};
use serde::{Deserialize, Serialize};

/// Percentage composition of a blend.
///
/// The four shares are independent; nothing requires them to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub hs_pct: f64,
    pub ls_pct: f64,
    pub ctp_pct: f64,
    pub butt_pct: f64,
}

impl Composition {
    pub const CPC_RANGE: RangeInclusive<f64> = 0.0..=100.0;
    pub const CTP_RANGE: RangeInclusive<f64> = 13.0..=16.0;
    pub const BUTT_RANGE: RangeInclusive<f64> = 25.0..=35.0;

    pub fn new(hs_pct: f64, ls_pct: f64, ctp_pct: f64, butt_pct: f64) -> Self {
        Self {
            hs_pct,
            ls_pct,
            ctp_pct,
            butt_pct,
        }
    }

    /// Composition with LS taking the remainder of HS (LS = 100 - HS)
    pub fn with_complementary_ls(hs_pct: f64, ctp_pct: f64, butt_pct: f64) -> Self {
        Self::new(hs_pct, 100.0 - hs_pct, ctp_pct, butt_pct)
    }

    /// Check every share against its operating range.
    ///
    /// The cost calculator itself accepts any real input; callers that take
    /// compositions from users run this first.
    pub fn validate(&self) -> Result<(), Error> {
        let checks = [
            ("CPC HS", self.hs_pct, &Self::CPC_RANGE),
            ("CPC LS", self.ls_pct, &Self::CPC_RANGE),
            ("CTP", self.ctp_pct, &Self::CTP_RANGE),
            ("Butt", self.butt_pct, &Self::BUTT_RANGE),
        ];
        for (name, value, range) in checks {
            if !value.is_finite() || !range.contains(&value) {
                return Err(Error::InvalidComposition(format!(
                    "{} percentage {} outside {}-{}",
                    name,
                    value,
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }
}

/// Unit prices (USD/ton) of the four families for one costing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialPrices {
    pub hs: f64,
    pub ls: f64,
    pub ctp: f64,
    pub butt: f64,
}

impl MaterialPrices {
    pub fn new(hs: f64, ls: f64, ctp: f64, butt: f64) -> Self {
        Self { hs, ls, ctp, butt }
    }

    /// Parse four textual prices, failing on the first one that is not numeric
    pub fn parse(hs: &str, ls: &str, ctp: &str, butt: &str) -> Result<Self, CostError> {
        Ok(Self {
            hs: parse_price(hs)?,
            ls: parse_price(ls)?,
            ctp: parse_price(ctp)?,
            butt: parse_price(butt)?,
        })
    }

    /// Reject non-finite or negative prices, reporting the first offender
    pub fn validate(&self) -> Result<(), CostError> {
        for value in [self.hs, self.ls, self.ctp, self.butt] {
            check_price(value)?;
        }
        Ok(())
    }
}

/// Parse a decimal cell as found in spreadsheet exports.
///
/// Accepts `1234.5`, `1,234.5` (thousands separators) and `178,82` (a single
/// decimal comma with no dot). Returns `None` for blank or non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.replace(',', "")
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a unit price; negative and non-numeric values are rejected
pub fn parse_price(raw: &str) -> Result<f64, CostError> {
    parse_decimal(raw)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| CostError::InvalidPriceFormat(raw.to_string()))
}

/// Accept a numeric price only when it is finite and non-negative
pub fn check_price(value: f64) -> Result<f64, CostError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CostError::InvalidPriceFormat(value.to_string()))
    }
}

/// Price cell of an uploaded candidate row.
///
/// A row with an unparsable price still loads; the error only surfaces when a
/// combination that uses the row is costed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceField {
    Value(f64),
    Invalid(String),
}

impl PriceField {
    pub fn parse(raw: &str) -> Self {
        match parse_price(raw) {
            Ok(v) => PriceField::Value(v),
            Err(_) => PriceField::Invalid(raw.to_string()),
        }
    }

    pub fn value(&self) -> Result<f64, CostError> {
        match self {
            PriceField::Value(v) => Ok(*v),
            PriceField::Invalid(raw) => Err(CostError::InvalidPriceFormat(raw.clone())),
        }
    }
}

impl From<f64> for PriceField {
    fn from(value: f64) -> Self {
        match check_price(value) {
            Ok(v) => PriceField::Value(v),
            Err(_) => PriceField::Invalid(value.to_string()),
        }
    }
}
