//! Domain model types

pub mod candidate;
pub mod composition;
pub mod material;
pub mod prediction;
pub mod reference;

pub use candidate::{CandidateRow, CandidateSet};
pub use composition::{check_price, parse_decimal, parse_price, Composition, MaterialPrices, PriceField};
pub use material::{BlendKey, MaterialFamily, SourceCode};
pub use prediction::{CombinationEvaluation, PredictionResult, SkipReason, SkippedCombination};
pub use reference::{ReferenceMetrics, ReferenceRecord, ReferenceStore};
