//! Adapters opening the loaded tables from configuration

use std::path::Path;

use anode_domain::model::{CandidateSet, ReferenceStore};
use anode_infra::{load_candidates, load_reference_store};
use anode_types::{Error, Result};

use crate::config::Config;

/// Open the reference store named by the config. A missing file is fatal.
pub fn open_reference_store(config: &Config) -> Result<ReferenceStore> {
    open_reference_store_at(&config.reference_path(), config.reference_delimiter)
}

/// Open a reference store at a custom path
pub fn open_reference_store_at(path: &Path, delimiter: char) -> Result<ReferenceStore> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    load_reference_store(path, delimiter).map_err(Into::into)
}

/// Open an uploaded candidate table (`.csv` or `.xlsx`)
pub fn open_candidates(path: &Path, config: &Config) -> Result<CandidateSet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    load_candidates(path, config.candidate_delimiter).map_err(Into::into)
}
