//! Classifier and model loader abstractions

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// A pre-trained binary classifier
///
/// Implementations take a batch of rows and return one label per row.
#[cfg_attr(test, automock)]
pub trait Classifier: Send + Sync + Debug {
    /// Predicts a label in {0, 1} for every row
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, DomainError>;
}

/// Source of classifier instances by model identifier
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelLoader: Send + Sync + Debug {
    /// Loads the model with the given identifier
    async fn load(&self, model_id: &str) -> Result<Arc<dyn Classifier>, DomainError>;

    /// Whether the model artifact is available without loading it
    async fn is_available(&self, model_id: &str) -> bool;
}
