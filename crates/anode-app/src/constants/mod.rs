//! Source catalogs and form defaults

pub mod defaults;
pub mod sources;

pub use defaults::{default_composition, default_prices, DEFAULT_REFERENCE_PATH};
pub use sources::{default_selection, is_known_source, sources_for, CPC_HS_SOURCES, CPC_LS_SOURCES, CTP_SOURCES};
