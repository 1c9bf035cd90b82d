use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Micro-batch processing configuration for stream jobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchConfig {
    /// Maximum number of change events consumed per micro-batch.
    #[serde(default = "default_max_events_per_trigger")]
    pub max_events_per_trigger: usize,
    /// Time, in milliseconds, to wait before polling an empty source log again.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl BatchConfig {
    /// Default maximum number of events per micro-batch.
    pub const DEFAULT_MAX_EVENTS_PER_TRIGGER: usize = 1000;

    /// Default polling interval in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

    /// Validates batch configuration settings.
    ///
    /// Ensures max_events_per_trigger is non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_events_per_trigger == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "batch.max_events_per_trigger".to_string(),
                constraint: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_events_per_trigger: default_max_events_per_trigger(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_max_events_per_trigger() -> usize {
    BatchConfig::DEFAULT_MAX_EVENTS_PER_TRIGGER
}

fn default_poll_interval_ms() -> u64 {
    BatchConfig::DEFAULT_POLL_INTERVAL_MS
}
