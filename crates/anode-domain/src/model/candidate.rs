//! Priced sourcing candidates for batch ranking

use serde::{Deserialize, Serialize};

use super::composition::PriceField;
use super::material::{MaterialFamily, SourceCode};

/// One uploaded row: a source of one family at a given price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub family: MaterialFamily,
    /// Source code (`Lot` column)
    pub lot: SourceCode,
    /// Descriptive source name (`Source` column)
    pub source: String,
    pub price: PriceField,
}

impl CandidateRow {
    pub fn new(
        family: MaterialFamily,
        lot: SourceCode,
        source: impl Into<String>,
        price: impl Into<PriceField>,
    ) -> Self {
        Self {
            family,
            lot,
            source: source.into(),
            price: price.into(),
        }
    }

    /// Label shown in results, e.g. `"A - Src1"`
    pub fn display_source(&self) -> String {
        if self.source.trim().is_empty() {
            self.lot.to_string()
        } else {
            format!("{} - {}", self.lot, self.source.trim())
        }
    }
}

/// Candidates grouped by family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSet {
    pub hs: Vec<CandidateRow>,
    pub ls: Vec<CandidateRow>,
    pub ctp: Vec<CandidateRow>,
}

impl CandidateSet {
    pub fn from_rows(rows: impl IntoIterator<Item = CandidateRow>) -> Self {
        let mut set = Self::default();
        for row in rows {
            set.push(row);
        }
        set
    }

    /// Add a row to its family's list. Butt rows carry no source and are dropped.
    pub fn push(&mut self, row: CandidateRow) {
        match row.family {
            MaterialFamily::CpcHs => self.hs.push(row),
            MaterialFamily::CpcLs => self.ls.push(row),
            MaterialFamily::Ctp => self.ctp.push(row),
            MaterialFamily::Butt => {
                tracing::debug!(lot = %row.lot, "butt candidate row ignored");
            }
        }
    }

    /// Size of the HS x LS x CTP cross-product
    pub fn combination_count(&self) -> usize {
        self.hs.len() * self.ls.len() * self.ctp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hs.is_empty() && self.ls.is_empty() && self.ctp.is_empty()
    }
}
