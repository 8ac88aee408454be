//! Retrieval parameters and processing limits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};

/// Parameters for nearest-neighbour retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct RetrievalSettings {
    /// Number of documents returned per query.
    pub top_k: usize,

    /// Minimum similarity score, in `[0.0, 1.0]`.
    pub similarity_threshold: f64,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: defaults::TOP_K_DOCUMENTS,
            similarity_threshold: defaults::SIMILARITY_THRESHOLD,
        }
    }
}

impl RetrievalSettings {
    /// Returns whether a hit with the given similarity should be kept.
    #[must_use]
    pub fn passes_threshold(&self, score: f64) -> bool {
        score >= self.similarity_threshold
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::invalid_setting(
                "retrieval.top_k",
                "must be greater than 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::invalid_setting(
                "retrieval.similarity_threshold",
                format!(
                    "{} is outside the range 0.0..=1.0",
                    self.similarity_threshold
                ),
            ));
        }

        Ok(())
    }
}

/// Limits applied while processing a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct ProcessingSettings {
    /// Processing budget per request in seconds.
    pub max_processing_time_secs: u64,

    /// Number of items handled per batch.
    pub batch_size: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            max_processing_time_secs: defaults::MAX_PROCESSING_TIME_SECS,
            batch_size: defaults::BATCH_SIZE,
        }
    }
}

impl ProcessingSettings {
    /// Returns the processing budget as a `Duration`.
    #[must_use]
    pub const fn max_processing_time(&self) -> Duration {
        Duration::from_secs(self.max_processing_time_secs)
    }

    /// Returns how many batches `items` items split into.
    #[must_use]
    pub const fn batch_count(&self, items: usize) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        items.div_ceil(self.batch_size)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_processing_time_secs == 0 {
            return Err(Error::invalid_setting(
                "processing.max_processing_time_secs",
                "must be greater than 0",
            ));
        }

        if self.batch_size == 0 {
            return Err(Error::invalid_setting(
                "processing.batch_size",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let retrieval = RetrievalSettings::default();
        assert!(retrieval.passes_threshold(0.7));
        assert!(retrieval.passes_threshold(0.95));
        assert!(!retrieval.passes_threshold(0.69));
    }

    #[test]
    fn reject_out_of_range_threshold() {
        for threshold in [-0.1, 1.01, f64::NAN] {
            let retrieval = RetrievalSettings {
                similarity_threshold: threshold,
                ..RetrievalSettings::default()
            };
            assert_eq!(
                retrieval.validate().unwrap_err().field(),
                Some("retrieval.similarity_threshold")
            );
        }
    }

    #[test]
    fn reject_zero_top_k() {
        let retrieval = RetrievalSettings {
            top_k: 0,
            ..RetrievalSettings::default()
        };
        assert_eq!(
            retrieval.validate().unwrap_err().field(),
            Some("retrieval.top_k")
        );
    }

    #[test]
    fn processing_budget_and_batches() {
        let processing = ProcessingSettings::default();
        assert_eq!(processing.max_processing_time(), Duration::from_secs(30));
        assert_eq!(processing.batch_count(0), 0);
        assert_eq!(processing.batch_count(50), 1);
        assert_eq!(processing.batch_count(51), 2);
    }

    #[test]
    fn reject_zero_limits() {
        let mut processing = ProcessingSettings::default();
        processing.batch_size = 0;
        assert_eq!(
            processing.validate().unwrap_err().field(),
            Some("processing.batch_size")
        );
        assert_eq!(processing.batch_count(10), 0);

        let mut processing = ProcessingSettings::default();
        processing.max_processing_time_secs = 0;
        assert_eq!(
            processing.validate().unwrap_err().field(),
            Some("processing.max_processing_time_secs")
        );
    }
}
