use serde::{Deserialize, Serialize};

use crate::load::Config;
use crate::shared::{ChannelsConfig, PipelineConfig, StorageConfig, ValidationError};

/// Top-level configuration for the transformer service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransformerConfig {
    /// Job selection and micro-batch settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Log and checkpoint storage locations.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Per-entity source and sink channel names.
    #[serde(default)]
    pub channels: ChannelsConfig,
}

impl TransformerConfig {
    /// Validates the full configuration before any job is constructed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pipeline.validate()?;
        self.storage.validate()?;
        self.channels.validate()?;

        Ok(())
    }
}

impl Config for TransformerConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &["pipeline.jobs"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TransformerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_selects_all_jobs() {
        let config = TransformerConfig::default();
        assert!(config.pipeline.jobs.is_empty());
    }

    #[test]
    fn unknown_job_is_rejected() {
        let mut config = TransformerConfig::default();
        config.pipeline.jobs = vec!["reservation".to_string(), "laundry".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut config = TransformerConfig::default();
        config.pipeline.batch.max_events_per_trigger = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_channels_follow_connector_naming() {
        let config = TransformerConfig::default();
        assert_eq!(
            config.channels.reservation.source_topic,
            "postgres_server.public.reservation_raw"
        );
        assert_eq!(
            config.channels.reservation.sink_topic,
            "reservations_transformed"
        );
        assert_eq!(
            config.channels.transaction_resto.sink_topic,
            "transaction_resto_transformed"
        );
    }
}
