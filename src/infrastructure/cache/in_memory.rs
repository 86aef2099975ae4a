//! In-memory prediction cache

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::cache::{CachedPrediction, PredictionCache, PredictionKey};

/// Thread-safe, unbounded in-memory prediction cache
///
/// Entries live until the process exits or [`PredictionCache::clear`] is
/// called; overwriting a key replaces its timestamp.
#[derive(Debug, Default)]
pub struct InMemoryPredictionCache {
    entries: RwLock<HashMap<PredictionKey, CachedPrediction>>,
}

impl InMemoryPredictionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PredictionCache for InMemoryPredictionCache {
    fn get(&self, key: &PredictionKey) -> Option<CachedPrediction> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).copied()
    }

    fn put(&self, key: PredictionKey, entry: CachedPrediction) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, entry);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_put_get() {
        let cache = InMemoryPredictionCache::new();
        let key = PredictionKey::new("diabetes_model", &[1.0, 2.0]);
        let entry = CachedPrediction::new(1, Utc::now());

        cache.put(key.clone(), entry);

        assert_eq!(cache.get(&key), Some(entry));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let cache = InMemoryPredictionCache::new();
        let key = PredictionKey::new("diabetes_model", &[1.0]);

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_overwrite_replaces_entry() {
        let cache = InMemoryPredictionCache::new();
        let key = PredictionKey::new("heart_disease_model", &[3.0]);
        let first = CachedPrediction::new(0, Utc::now());
        let second = CachedPrediction::new(1, first.computed_at + chrono::TimeDelta::seconds(400));

        cache.put(key.clone(), first);
        cache.put(key.clone(), second);

        assert_eq!(cache.get(&key), Some(second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_are_independent_per_model() {
        let cache = InMemoryPredictionCache::new();
        let now = Utc::now();

        cache.put(PredictionKey::new("diabetes_model", &[1.0]), CachedPrediction::new(1, now));
        cache.put(PredictionKey::new("parkinsons_model", &[1.0]), CachedPrediction::new(0, now));

        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache
                .get(&PredictionKey::new("parkinsons_model", &[1.0]))
                .map(|e| e.label),
            Some(0)
        );
    }

    #[test]
    fn test_clear() {
        let cache = InMemoryPredictionCache::new();
        cache.put(PredictionKey::new("diabetes_model", &[1.0]), CachedPrediction::new(1, Utc::now()));

        cache.clear();

        assert!(cache.is_empty());
    }
}
