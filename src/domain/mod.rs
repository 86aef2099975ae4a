//! Domain layer - Core business logic and entities

pub mod cache;
pub mod disease;
pub mod error;
pub mod prediction;

pub use cache::{CachedPrediction, PredictionCache, PredictionKey};
pub use disease::{Assessment, Disease, FeatureField, Outcome};
pub use error::DomainError;
pub use prediction::{
    validate_inputs, Classifier, Clock, InputValidationError, ManualClock, ModelLoader,
    SystemClock,
};
