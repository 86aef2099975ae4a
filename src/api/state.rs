//! Application state shared by handlers

use std::sync::Arc;

use crate::api::pages::PageRenderer;
use crate::infrastructure::services::PredictionService;

#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(prediction_service: Arc<PredictionService>, pages: Arc<PageRenderer>) -> Self {
        Self {
            prediction_service,
            pages,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use chrono::Utc;

    use super::AppState;
    use crate::api::pages::PageRenderer;
    use crate::domain::prediction::{MockClassifier, MockModelLoader};
    use crate::domain::{Classifier, DomainError, ManualClock};
    use crate::infrastructure::cache::InMemoryPredictionCache;
    use crate::infrastructure::model::ModelRegistry;
    use crate::infrastructure::services::{PredictionService, PredictionServiceConfig};

    /// State whose models all answer `label`; `None` makes every load fail
    pub fn state_with_label(label: Option<u8>) -> AppState {
        let mut loader = MockModelLoader::new();
        match label {
            Some(label) => {
                loader.expect_load().returning(move |_| {
                    let mut classifier = MockClassifier::new();
                    classifier
                        .expect_predict()
                        .returning(move |rows| Ok(vec![label; rows.len()]));
                    Ok(Arc::new(classifier) as Arc<dyn Classifier>)
                });
                loader.expect_is_available().returning(|_| true);
            }
            None => {
                loader.expect_load().returning(|id| {
                    Err(DomainError::model(
                        id,
                        format!("Model file not found: saved_models/{}.json", id),
                    ))
                });
                loader.expect_is_available().returning(|_| false);
            }
        }

        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(Arc::new(loader))),
            Arc::new(InMemoryPredictionCache::new()),
            Arc::new(ManualClock::new(Utc::now())),
            PredictionServiceConfig::default(),
        );

        AppState::new(
            Arc::new(service),
            Arc::new(PageRenderer::new().unwrap()),
        )
    }
}
