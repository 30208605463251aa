//! Domain services

pub mod combination_ranker;
pub mod cost_calculator;
pub mod metric_lookup;
pub mod ranking_report;

pub use combination_ranker::{evaluate_combinations, rank_combinations, RankingOptions};
pub use cost_calculator::{compute_unit_cost, compute_unit_cost_from_text, efficiency_ratio, round2};
pub use metric_lookup::lookup_metrics;
pub use ranking_report::generate_ranking_report;
