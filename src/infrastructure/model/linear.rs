//! Linear decision-function classifier and its serialized artifact format

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Classifier, DomainError};

/// Per-feature standardization applied before the decision function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect()
    }
}

/// Binary classifier of the form `w . x + b > 0`
///
/// Covers logistic regression and linear SVM models exported with their
/// coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<StandardScaler>,
}

impl LinearClassifier {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self {
            weights,
            intercept,
            scaler: None,
        }
    }

    pub fn with_scaler(mut self, scaler: StandardScaler) -> Self {
        self.scaler = Some(scaler);
        self
    }

    /// Check internal consistency of the coefficients
    pub fn validate(&self) -> Result<(), String> {
        if self.weights.is_empty() {
            return Err("model has no weights".to_string());
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != self.weights.len() || scaler.scale.len() != self.weights.len() {
                return Err(format!(
                    "scaler has {} means and {} scales for {} weights",
                    scaler.mean.len(),
                    scaler.scale.len(),
                    self.weights.len()
                ));
            }

            if scaler.scale.iter().any(|s| *s == 0.0) {
                return Err("scaler contains a zero scale".to_string());
            }
        }

        Ok(())
    }

    /// Raw decision value for one row
    pub fn decision(&self, row: &[f64]) -> f64 {
        let scaled;
        let row = match &self.scaler {
            Some(scaler) => {
                scaled = scaler.transform(row);
                scaled.as_slice()
            }
            None => row,
        };

        row.iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, DomainError> {
        rows.iter()
            .map(|row| {
                if row.len() != self.weights.len() {
                    return Err(DomainError::prediction(format!(
                        "expected {} features, got {}",
                        self.weights.len(),
                        row.len()
                    )));
                }

                Ok(u8::from(self.decision(row) > 0.0))
            })
            .collect()
    }
}

/// Serialized model file contents, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearClassifier),
}

impl ModelArtifact {
    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("invalid model artifact: {}", e))
    }

    /// Validate and turn the artifact into a ready classifier
    pub fn into_classifier(self) -> Result<Arc<dyn Classifier>, String> {
        match self {
            Self::Linear(model) => {
                model.validate()?;
                Ok(Arc::new(model))
            }
        }
    }
}
