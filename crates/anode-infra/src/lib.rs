//! Infrastructure layer - table loaders at the input boundary
//!
//! Everything here turns files into typed domain records once; the domain
//! services never see raw cells.

pub mod candidate_loader;
pub mod error;
pub mod reference_csv;
mod table;

pub use candidate_loader::{load_candidates, parse_candidates_csv};
pub use error::TableLoadError;
pub use reference_csv::{load_reference_store, parse_reference_csv};
