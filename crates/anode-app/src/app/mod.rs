//! Use cases

mod prediction_service;

pub use prediction_service::{PredictionOptions, PredictionService, SinglePrediction};
