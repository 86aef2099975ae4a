//! Prediction service: validation, cached model invocation and assessment

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::TimeDelta;
use tracing::{debug, info, warn};

use crate::domain::cache::{CachedPrediction, PredictionCache, PredictionKey};
use crate::domain::prediction::validate_inputs;
use crate::domain::{Assessment, Clock, Disease, DomainError, InputValidationError, Outcome};
use crate::infrastructure::model::ModelRegistry;
use crate::infrastructure::observability::{
    record_cache_lookup, record_prediction, record_prediction_error,
};

/// Configuration for the prediction service
#[derive(Debug, Clone)]
pub struct PredictionServiceConfig {
    /// How long a computed label is reused for identical input
    pub ttl: Duration,
    /// Check inputs against each field's declared range
    pub enforce_field_ranges: bool,
}

impl Default for PredictionServiceConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            enforce_field_ranges: true,
        }
    }
}

impl PredictionServiceConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_field_ranges(mut self, enforce: bool) -> Self {
        self.enforce_field_ranges = enforce;
        self
    }
}

/// Validates form input, invokes models through a per-entry TTL cache and
/// maps labels to assessments
#[derive(Debug)]
pub struct PredictionService {
    registry: Arc<ModelRegistry>,
    cache: Arc<dyn PredictionCache>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    enforce_field_ranges: bool,
}

impl PredictionService {
    pub fn new(
        registry: Arc<ModelRegistry>,
        cache: Arc<dyn PredictionCache>,
        clock: Arc<dyn Clock>,
        config: PredictionServiceConfig,
    ) -> Self {
        Self {
            registry,
            cache,
            clock,
            ttl: TimeDelta::from_std(config.ttl).unwrap_or(TimeDelta::MAX),
            enforce_field_ranges: config.enforce_field_ranges,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Validate raw inputs for a disease form
    pub fn validate<S: AsRef<str>>(
        &self,
        disease: Disease,
        inputs: &[S],
    ) -> Result<Vec<f64>, InputValidationError> {
        validate_inputs(inputs, disease.fields(), self.enforce_field_ranges)
    }

    /// Return the label for a feature vector, reusing a fresh cached entry
    ///
    /// Every failure is reported as [`DomainError::Prediction`].
    pub async fn predict(&self, model_id: &str, features: &[f64]) -> Result<u8, DomainError> {
        let key = PredictionKey::new(model_id, features);

        if let Some(entry) = self.cache.get(&key) {
            if entry.is_fresh(self.clock.now(), self.ttl) {
                debug!(key = %key, label = entry.label, "Prediction cache hit");
                record_cache_lookup(model_id, true);
                return Ok(entry.label);
            }
        }

        record_cache_lookup(model_id, false);

        let start = Instant::now();
        let label = self.invoke(model_id, features).await.map_err(|e| {
            warn!(model_id = %model_id, error = %e, "Prediction failed");
            record_prediction_error(model_id);
            into_prediction_error(e)
        })?;

        self.cache
            .put(key, CachedPrediction::new(label, self.clock.now()));
        record_prediction(model_id, label, start.elapsed());

        info!(model_id = %model_id, label, "Prediction computed");

        Ok(label)
    }

    /// Validate, predict and map the label to the disease's advice block
    ///
    /// Validation failures come back as [`DomainError::Validation`] without
    /// touching the model.
    pub async fn assess<S: AsRef<str>>(
        &self,
        disease: Disease,
        inputs: &[S],
    ) -> Result<Assessment, DomainError> {
        let features = self
            .validate(disease, inputs)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let label = self.predict(disease.model_id(), &features).await?;
        let outcome = Outcome::from_label(label)?;

        Ok(disease.assess(outcome))
    }

    async fn invoke(&self, model_id: &str, features: &[f64]) -> Result<u8, DomainError> {
        let model = self.registry.get(model_id).await?;
        let labels = model.predict(&[features.to_vec()])?;

        let label = labels
            .first()
            .copied()
            .ok_or_else(|| DomainError::prediction("Model returned no prediction"))?;

        Outcome::from_label(label)?;

        Ok(label)
    }
}

fn into_prediction_error(err: DomainError) -> DomainError {
    match err {
        DomainError::Prediction { .. } => err,
        DomainError::Model { model, message } => {
            DomainError::prediction(format!("{}: {}", model, message))
        }
        other => DomainError::prediction(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use crate::domain::prediction::MockModelLoader;
    use crate::domain::{Classifier, ManualClock};
    use crate::infrastructure::cache::InMemoryPredictionCache;

    const DIABETES_INPUT: [&str; 8] = ["2", "150", "80", "30", "100", "28.5", "0.5", "35"];

    /// Returns a fixed label and counts invocations
    #[derive(Debug)]
    struct CountingClassifier {
        label: u8,
        calls: Arc<AtomicUsize>,
    }

    impl Classifier for CountingClassifier {
        fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<u8>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![self.label; rows.len()])
        }
    }

    struct Fixture {
        service: PredictionService,
        clock: Arc<ManualClock>,
        calls: Arc<AtomicUsize>,
    }

    fn fixture(label: u8) -> Fixture {
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier: Arc<dyn Classifier> = Arc::new(CountingClassifier {
            label,
            calls: calls.clone(),
        });

        let mut loader = MockModelLoader::new();
        loader
            .expect_load()
            .returning(move |_| Ok(classifier.clone()));

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(Arc::new(loader))),
            Arc::new(InMemoryPredictionCache::new()),
            clock.clone(),
            PredictionServiceConfig::default(),
        );

        Fixture {
            service,
            clock,
            calls,
        }
    }

    #[tokio::test]
    async fn test_identical_input_within_ttl_hits_cache() {
        let f = fixture(1);
        let features = [2.0, 150.0, 80.0, 30.0, 100.0, 28.5, 0.5, 35.0];

        let first = f.service.predict("diabetes_model", &features).await.unwrap();
        f.clock.advance(TimeDelta::seconds(299));
        let second = f.service.predict("diabetes_model", &features).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(f.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_recomputes() {
        let f = fixture(0);
        let features = [1.0, 2.0];

        f.service.predict("diabetes_model", &features).await.unwrap();
        f.clock.advance(TimeDelta::seconds(301));
        f.service.predict("diabetes_model", &features).await.unwrap();

        assert_eq!(f.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_staleness_is_tracked_per_entry() {
        let f = fixture(1);

        f.service.predict("diabetes_model", &[1.0]).await.unwrap();
        f.clock.advance(TimeDelta::seconds(200));
        f.service.predict("diabetes_model", &[2.0]).await.unwrap();
        f.clock.advance(TimeDelta::seconds(150));

        // [1.0] is 350s old even though the model predicted 150s ago
        f.service.predict("diabetes_model", &[1.0]).await.unwrap();
        assert_eq!(f.calls.load(Ordering::SeqCst), 3);

        // [2.0] is still fresh
        f.service.predict("diabetes_model", &[2.0]).await.unwrap();
        assert_eq!(f.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_different_models_do_not_share_entries() {
        let f = fixture(1);

        f.service.predict("diabetes_model", &[1.0]).await.unwrap();
        f.service.predict("heart_disease_model", &[1.0]).await.unwrap();

        assert_eq!(f.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_assess_at_risk() {
        let f = fixture(1);

        let assessment = f
            .service
            .assess(Disease::Diabetes, &DIABETES_INPUT)
            .await
            .unwrap();

        assert_eq!(assessment.outcome, Outcome::AtRisk);
        assert_eq!(assessment.result, "The person is at risk of diabetes");
        assert_eq!(
            assessment.recommendations,
            &[
                "Monitor blood glucose levels regularly",
                "Maintain a balanced diet rich in fiber and low in refined carbohydrates",
                "Engage in regular physical activity (150 minutes/week)",
                "Maintain a healthy BMI (18.5-24.9)",
                "Consider consulting an endocrinologist",
            ]
        );
    }

    #[tokio::test]
    async fn test_assess_not_at_risk() {
        let f = fixture(0);

        let assessment = f
            .service
            .assess(Disease::Diabetes, &DIABETES_INPUT)
            .await
            .unwrap();

        assert_eq!(assessment.outcome, Outcome::NotAtRisk);
        assert_eq!(assessment.result, "The person is not at risk of diabetes");
        assert_eq!(
            assessment.recommendations,
            &[
                "Continue maintaining a healthy lifestyle",
                "Regular exercise (30 minutes daily)",
                "Balanced nutrition with whole grains",
                "Regular health check-ups",
                "Adequate sleep (7-9 hours)",
            ]
        );
    }

    #[tokio::test]
    async fn test_assess_non_numeric_never_invokes_model() {
        let mut loader = MockModelLoader::new();
        loader.expect_load().never();

        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(Arc::new(loader))),
            Arc::new(InMemoryPredictionCache::new()),
            Arc::new(ManualClock::default()),
            PredictionServiceConfig::default(),
        );

        let mut inputs = DIABETES_INPUT;
        inputs[1] = "abc";

        let err = service.assess(Disease::Diabetes, &inputs).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(err.to_string().contains("Please enter valid numeric values"));
    }

    #[tokio::test]
    async fn test_assess_out_of_bounds() {
        let f = fixture(1);
        let mut inputs = DIABETES_INPUT;
        inputs[4] = "1500";

        let err = f.service.assess(Disease::Diabetes, &inputs).await.unwrap_err();

        assert!(err.to_string().contains("Values should be between 0 and 1000"));
        assert_eq!(f.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_failure_is_wrapped() {
        let mut loader = MockModelLoader::new();
        loader
            .expect_load()
            .returning(|id| Err(DomainError::model(id, "Model file not found: saved_models/x.json")));

        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(Arc::new(loader))),
            Arc::new(InMemoryPredictionCache::new()),
            Arc::new(ManualClock::default()),
            PredictionServiceConfig::default(),
        );

        let err = service.predict("diabetes_model", &[1.0]).await.unwrap_err();

        assert!(matches!(err, DomainError::Prediction { .. }));
        assert_eq!(
            err.to_string(),
            "Prediction error: diabetes_model: Model file not found: saved_models/x.json"
        );
    }

    #[tokio::test]
    async fn test_invalid_label_is_not_cached() {
        let f = fixture(7);

        let err = f.service.predict("diabetes_model", &[1.0]).await.unwrap_err();
        assert!(err.to_string().contains("Unexpected label 7"));

        assert!(f.service.predict("diabetes_model", &[1.0]).await.is_err());
        assert_eq!(f.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_field_ranges_disabled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier: Arc<dyn Classifier> = Arc::new(CountingClassifier {
            label: 0,
            calls: calls.clone(),
        });
        let mut loader = MockModelLoader::new();
        loader
            .expect_load()
            .returning(move |_| Ok(classifier.clone()));

        let service = PredictionService::new(
            Arc::new(ModelRegistry::new(Arc::new(loader))),
            Arc::new(InMemoryPredictionCache::new()),
            Arc::new(ManualClock::default()),
            PredictionServiceConfig::default().with_field_ranges(false),
        );

        let mut inputs = DIABETES_INPUT;
        inputs[7] = "150";

        assert!(service.assess(Disease::Diabetes, &inputs).await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
