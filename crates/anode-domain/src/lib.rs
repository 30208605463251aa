//! Domain layer for anode cost prediction
//!
//! Pure models and services. Nothing in this crate touches the filesystem;
//! tables are loaded by `anode-infra` and handed over as typed records.

pub mod model;
pub mod service;
