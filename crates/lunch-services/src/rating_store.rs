//! Rating aggregate keyed by place name.
//!
//! Buckets are keyed by the name string alone: renaming a restaurant orphans
//! its history and two restaurants sharing a name share one bucket. Sums and
//! counts only ever grow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::json_file::{read_json, write_json_atomic};

/// Highest score the input surface accepts.
pub const MAX_SCORE: f64 = 5.0;

/// Running sum and count of scores for one place name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub sum: f64,
    pub count: u32,
}

impl RatingBucket {
    /// Average rounded to one decimal, `None` while nothing was rated.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(round_one_decimal(self.sum / f64::from(self.count)))
    }
}

/// All rating buckets. Serialized as a plain `name -> {sum, count}` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingAggregate {
    buckets: BTreeMap<String, RatingBucket>,
}

impl RatingAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one score to the bucket for `place_name`, creating it if needed.
    ///
    /// The score is not range-checked here; callers constrain it to
    /// `[0.0, 5.0]` in 0.1 steps.
    pub fn record(&mut self, place_name: &str, score: f64) {
        let bucket = self.buckets.entry(place_name.to_string()).or_default();
        bucket.sum += score;
        bucket.count += 1;
    }

    pub fn average_for(&self, place_name: &str) -> Option<f64> {
        self.buckets.get(place_name).and_then(RatingBucket::average)
    }

    pub fn bucket(&self, place_name: &str) -> Option<&RatingBucket> {
        self.buckets.get(place_name)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Rating backing file.
///
/// There is no cache: every operation reloads the file, so edits made by
/// another process are picked up on the next read.
#[derive(Debug, Clone)]
pub struct RatingStore {
    path: PathBuf,
}

impl RatingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the aggregate. A missing or unparsable file yields an empty one.
    pub fn load(&self) -> RatingAggregate {
        if !self.path.exists() {
            tracing::debug!("No ratings file at {}", self.path.display());
            return RatingAggregate::default();
        }
        match read_json(&self.path) {
            Ok(aggregate) => aggregate,
            Err(e) => {
                tracing::warn!("Ignoring unreadable ratings: {}", e);
                RatingAggregate::default()
            }
        }
    }

    /// Overwrite the backing file with the full aggregate.
    ///
    /// # Errors
    /// Returns `StoreError::Persistence` if the file cannot be written.
    pub fn save(&self, aggregate: &RatingAggregate) -> StoreResult<()> {
        write_json_atomic(&self.path, aggregate)?;
        tracing::debug!(places = aggregate.len(), "Ratings saved");
        Ok(())
    }

    /// Reload, record one score, save. Returns the new average for the place.
    ///
    /// # Errors
    /// Returns `StoreError::Discarded` if the file cannot be written: nothing
    /// keeps the aggregate in memory, so the score is lost.
    pub fn submit(&self, place_name: &str, score: f64) -> StoreResult<Option<f64>> {
        let mut aggregate = self.load();
        aggregate.record(place_name, score);
        self.save(&aggregate).map_err(StoreError::discarded)?;

        let average = aggregate.average_for(place_name);
        tracing::info!(place = place_name, score, ?average, "Rating recorded");
        Ok(average)
    }

    /// Current average for one place, read fresh from the file.
    pub fn average_for(&self, place_name: &str) -> Option<f64> {
        self.load().average_for(place_name)
    }
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
