//! Reference metric records and the read-only store that holds them

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Carbon-consumption and performance metrics of one blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMetrics {
    /// Air reactivity residue (%)
    pub rro2: f64,
    /// CO2 reactivity residue (%)
    pub rrco2: f64,
    /// Air permeability (nPm)
    pub ap: f64,
    /// Thermal conductivity (W/mK)
    pub tc: f64,
    /// Net anode consumption (kg/t.Al); blank in some reference rows
    pub nac: Option<f64>,
}

impl std::fmt::Display for ReferenceMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RRO2:  {} %", self.rro2)?;
        writeln!(f, "RRCO2: {} %", self.rrco2)?;
        writeln!(f, "AP:    {} nPm", self.ap)?;
        writeln!(f, "TC:    {} W/mK", self.tc)?;
        match self.nac {
            Some(nac) => write!(f, "NAC:   {} kg/t.Al", nac),
            None => write!(f, "NAC:   (missing)"),
        }
    }
}

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Concatenated blend key (`Lot` column)
    pub lot: String,
    pub metrics: ReferenceMetrics,
}

/// Immutable table of reference metrics keyed by blend lot.
///
/// Built once from loaded records. When the source holds the same lot more
/// than once the first record wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    records: Vec<ReferenceRecord>,
    index: HashMap<String, usize>,
}

impl ReferenceStore {
    pub fn from_records(records: Vec<ReferenceRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.contains_key(&record.lot) {
                tracing::warn!(lot = %record.lot, row = pos, "duplicate reference lot ignored");
                continue;
            }
            index.insert(record.lot.clone(), pos);
        }
        Self { records, index }
    }

    /// Exact-match lookup on the `Lot` value
    pub fn get(&self, lot: &str) -> Option<&ReferenceMetrics> {
        self.index.get(lot).map(|&pos| &self.records[pos].metrics)
    }

    /// Records in source order, duplicates included
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    /// Number of distinct lots
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl FromIterator<ReferenceRecord> for ReferenceStore {
    fn from_iter<I: IntoIterator<Item = ReferenceRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
