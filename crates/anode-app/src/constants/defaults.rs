//! Default composition and prices of the single-prediction form

use anode_domain::model::{Composition, MaterialPrices};

/// Reference table shipped alongside the application
pub const DEFAULT_REFERENCE_PATH: &str = "data/prediksi_material_nac.csv";

pub const DEFAULT_HS_PCT: f64 = 70.0;
pub const DEFAULT_CTP_PCT: f64 = 14.0;
pub const DEFAULT_BUTT_PCT: f64 = 30.0;

/// USD/ton
pub const DEFAULT_HS_PRICE: f64 = 1000.0;
pub const DEFAULT_LS_PRICE: f64 = 1200.0;
pub const DEFAULT_CTP_PRICE: f64 = 1500.0;
pub const DEFAULT_BUTT_PRICE: f64 = 178.82;

/// 70 / 30 / 14 / 30, with LS as the complement of HS
pub fn default_composition() -> Composition {
    Composition::with_complementary_ls(DEFAULT_HS_PCT, DEFAULT_CTP_PCT, DEFAULT_BUTT_PCT)
}

pub fn default_prices() -> MaterialPrices {
    MaterialPrices::new(
        DEFAULT_HS_PRICE,
        DEFAULT_LS_PRICE,
        DEFAULT_CTP_PRICE,
        DEFAULT_BUTT_PRICE,
    )
}
