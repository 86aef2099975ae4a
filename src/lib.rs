//! Health Assistant
//!
//! Disease risk pages backed by pre-trained binary classifiers:
//! - Diabetes, heart disease and Parkinson's disease forms
//! - Input validation and a TTL cache in front of every model call
//! - A launcher that starts the UI server and redirects traffic to it

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::pages::PageRenderer;
use api::state::AppState;
use domain::SystemClock;
use infrastructure::{
    cache::InMemoryPredictionCache,
    model::{FileModelLoader, ModelRegistry},
    services::{PredictionService, PredictionServiceConfig},
};
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let loader = FileModelLoader::from_config(&config.models);
    info!(
        dir = %loader.dir().display(),
        extension = %config.models.extension,
        "Model artifacts directory"
    );

    let registry = Arc::new(ModelRegistry::new(Arc::new(loader)));
    let service_config = PredictionServiceConfig::default()
        .with_ttl(config.cache.ttl())
        .with_field_ranges(config.validation.enforce_field_ranges);

    let prediction_service = PredictionService::new(
        registry,
        Arc::new(InMemoryPredictionCache::new()),
        Arc::new(SystemClock),
        service_config,
    );

    let pages = PageRenderer::new()?;

    Ok(AppState::new(Arc::new(prediction_service), Arc::new(pages)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_with_missing_models() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.models.dir = dir.path().to_path_buf();

        let state = create_app_state(&config).unwrap();

        assert!(!state
            .prediction_service
            .registry()
            .is_available("diabetes_model")
            .await);
    }
}
