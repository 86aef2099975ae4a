//! Loads model artifacts from a directory on disk

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ModelArtifact;
use crate::config::ModelsConfig;
use crate::domain::{Classifier, DomainError, ModelLoader};

/// Model loader reading `<dir>/<model_id>.<extension>`
#[derive(Debug, Clone)]
pub struct FileModelLoader {
    dir: PathBuf,
    extension: String,
}

impl FileModelLoader {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ModelsConfig) -> Self {
        Self::new(config.dir.clone(), config.extension.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact for a model identifier
    pub fn model_path(&self, model_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", model_id, self.extension))
    }
}

#[async_trait]
impl ModelLoader for FileModelLoader {
    async fn load(&self, model_id: &str) -> Result<Arc<dyn Classifier>, DomainError> {
        let path = self.model_path(model_id);
        debug!(model_id = %model_id, path = %path.display(), "Loading model artifact");

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(DomainError::model(
                model_id,
                format!("Model file not found: {}", path.display()),
            ));
        }

        let data = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::model(model_id, format!("Failed to read {}: {}", path.display(), e))
        })?;

        let classifier = ModelArtifact::from_json(&data)
            .and_then(ModelArtifact::into_classifier)
            .map_err(|e| DomainError::model(model_id, e))?;

        info!(model_id = %model_id, path = %path.display(), "Model loaded");

        Ok(classifier)
    }

    async fn is_available(&self, model_id: &str) -> bool {
        tokio::fs::try_exists(self.model_path(model_id))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{"kind": "linear", "weights": [1.0, 1.0], "intercept": -10.0}"#;

    #[test]
    fn test_model_path() {
        let loader = FileModelLoader::new("saved_models", "json");
        assert_eq!(
            loader.model_path("diabetes_model"),
            PathBuf::from("saved_models/diabetes_model.json")
        );
    }

    #[tokio::test]
    async fn test_load_existing_model() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("heart_disease_model.json"), ARTIFACT).unwrap();

        let loader = FileModelLoader::new(dir.path(), "json");
        assert!(loader.is_available("heart_disease_model").await);

        let model = loader.load("heart_disease_model").await.unwrap();
        assert_eq!(model.predict(&[vec![6.0, 6.0], vec![1.0, 2.0]]).unwrap(), vec![1, 0]);
    }

    #[tokio::test]
    async fn test_load_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileModelLoader::new(dir.path(), "json");

        assert!(!loader.is_available("parkinsons_model").await);

        let err = loader.load("parkinsons_model").await.unwrap_err();
        assert!(err.to_string().contains("Model file not found"));
    }

    #[tokio::test]
    async fn test_load_corrupt_model() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("diabetes_model.json"), "not json").unwrap();

        let loader = FileModelLoader::new(dir.path(), "json");
        let err = loader.load("diabetes_model").await.unwrap_err();

        assert!(matches!(err, DomainError::Model { .. }));
        assert!(err.to_string().contains("invalid model artifact"));
    }
}
