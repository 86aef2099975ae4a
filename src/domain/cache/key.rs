//! Prediction cache keys

use std::fmt;

/// Canonical string form of a feature vector, e.g. `[2.0, 150.0, 28.5]`
pub fn canonical_features(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", parts.join(", "))
}

/// Cache key of a single prediction: model identifier plus canonical input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionKey {
    model_id: String,
    features: String,
}

impl PredictionKey {
    pub fn new(model_id: impl Into<String>, values: &[f64]) -> Self {
        Self {
            model_id: model_id.into(),
            features: canonical_features(values),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn features(&self) -> &str {
        &self.features
    }
}

impl fmt::Display for PredictionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.model_id, self.features)
    }
}
