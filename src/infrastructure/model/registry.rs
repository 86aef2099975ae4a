//! Process-wide registry that loads each model at most once

use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::warn;

use crate::domain::{Classifier, DomainError, ModelLoader};

/// Lazily populated model registry
///
/// The first request for a model loads it through the [`ModelLoader`];
/// concurrent first requests share a single load. Loaded models stay resident
/// for the rest of the process. Failed loads are not cached.
pub struct ModelRegistry {
    loader: Arc<dyn ModelLoader>,
    models: MokaCache<String, Arc<dyn Classifier>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loader", &self.loader)
            .field("loaded", &self.models.entry_count())
            .finish()
    }
}

impl ModelRegistry {
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            loader,
            models: MokaCache::builder().build(),
        }
    }

    /// Returns the resident model, loading it on first use
    pub async fn get(&self, model_id: &str) -> Result<Arc<dyn Classifier>, DomainError> {
        let loader = self.loader.clone();
        let id = model_id.to_string();

        self.models
            .try_get_with(model_id.to_string(), async move { loader.load(&id).await })
            .await
            .map_err(|e| {
                warn!(model_id = %model_id, error = %e, "Model load failed");
                // moka keeps its own handle on the shared error
                Arc::unwrap_or_clone(e)
            })
    }

    pub async fn is_loaded(&self, model_id: &str) -> bool {
        self.models.get(model_id).await.is_some()
    }

    /// Whether the artifact can be found without loading it
    pub async fn is_available(&self, model_id: &str) -> bool {
        self.is_loaded(model_id).await || self.loader.is_available(model_id).await
    }
}
