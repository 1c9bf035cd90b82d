use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Filesystem locations for the local log store and checkpoint store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Directory holding the append-only source and sink log channels.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Directory holding per-job checkpoint cursors.
    #[serde(default = "default_checkpoint_dir")]
    pub checkpoint_dir: PathBuf,
}

impl StorageConfig {
    /// Validates the storage paths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "storage.log_dir".to_string(),
                constraint: "must not be empty".to_string(),
            });
        }

        if self.checkpoint_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: "storage.checkpoint_dir".to_string(),
                constraint: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            checkpoint_dir: default_checkpoint_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("data/logs")
}

fn default_checkpoint_dir() -> PathBuf {
    PathBuf::from("data/checkpoints")
}
