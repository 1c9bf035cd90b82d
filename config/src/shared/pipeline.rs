use serde::{Deserialize, Serialize};

use crate::shared::{BatchConfig, ValidationError};

/// The entity job names the supervisor knows how to run.
pub const KNOWN_JOBS: &[&str] = &[
    "reservation",
    "profile_guest",
    "chat_whatsapp",
    "transaction_resto",
];

/// Stream job selection and batching configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineConfig {
    /// Entity jobs to run. An empty list means all known jobs.
    ///
    /// In environment form this is a comma-separated list, e.g.
    /// `APP_PIPELINE__JOBS=reservation,chat_whatsapp`.
    #[serde(default)]
    pub jobs: Vec<String>,
    /// Micro-batch settings shared by every stream job.
    #[serde(default)]
    pub batch: BatchConfig,
}

impl PipelineConfig {
    /// Validates the job selection and batch settings.
    ///
    /// Unknown job names are rejected here, before any job is constructed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for job in &self.jobs {
            if !KNOWN_JOBS.contains(&job.as_str()) {
                return Err(ValidationError::InvalidFieldValue {
                    field: "pipeline.jobs".to_string(),
                    constraint: format!(
                        "unknown job `{job}`, expected one of: {}",
                        KNOWN_JOBS.join(", ")
                    ),
                });
            }
        }

        self.batch.validate()?;

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            batch: BatchConfig::default(),
        }
    }
}
