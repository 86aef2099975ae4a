//! Cache domain - prediction cache abstraction

mod key;
mod repository;

pub use key::{canonical_features, PredictionKey};
pub use repository::{CachedPrediction, PredictionCache};
