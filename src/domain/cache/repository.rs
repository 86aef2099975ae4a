//! Prediction cache trait definition

use std::fmt::Debug;

use chrono::{DateTime, TimeDelta, Utc};

use super::PredictionKey;

/// A cached label and when it was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedPrediction {
    pub label: u8,
    pub computed_at: DateTime<Utc>,
}

impl CachedPrediction {
    pub fn new(label: u8, computed_at: DateTime<Utc>) -> Self {
        Self { label, computed_at }
    }

    /// Whether the entry is still within `ttl` of its own computation time
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.computed_at < ttl
    }
}

/// Store of computed predictions
///
/// Entries are never evicted by size; freshness is decided by the caller at
/// read time.
pub trait PredictionCache: Send + Sync + Debug {
    /// Gets the entry stored under a key, fresh or not
    fn get(&self, key: &PredictionKey) -> Option<CachedPrediction>;

    /// Stores an entry, replacing any previous one
    fn put(&self, key: PredictionKey, entry: CachedPrediction);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries
    fn clear(&self);
}
