//! File-backed checkpoint store.
//!
//! One file per job under the checkpoint directory, holding the committed
//! offset in decimal. Writes go through a temporary file and an atomic
//! rename, so a crash mid-write leaves the previous checkpoint intact.

use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::checkpoint::CheckpointStore;
use crate::error::{ErrorKind, EtlResult};
use crate::etl_error;
use crate::types::LogOffset;

/// Checkpoint store over per-job offset files.
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    checkpoint_dir: PathBuf,
}

impl FileCheckpointStore {
    /// Creates a checkpoint store rooted at `checkpoint_dir`.
    pub fn new(checkpoint_dir: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
        }
    }

    fn offset_path(&self, job: &str) -> PathBuf {
        self.checkpoint_dir.join(format!("{job}.offset"))
    }
}

impl CheckpointStore for FileCheckpointStore {
    async fn load(&self, job: &str) -> EtlResult<Option<LogOffset>> {
        let path = self.offset_path(job);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(etl_error!(
                    ErrorKind::CheckpointIoError,
                    "Failed to read checkpoint",
                    format!("job '{job}' at {}", path.display()),
                    source: err
                ));
            }
        };

        let offset = contents.trim().parse::<u64>().map_err(|err| {
            etl_error!(
                ErrorKind::ConversionError,
                "Corrupt checkpoint contents",
                format!("job '{job}' at {}: {:?}", path.display(), contents.trim()),
                source: err
            )
        })?;

        Ok(Some(LogOffset(offset)))
    }

    async fn store(&self, job: &str, offset: LogOffset) -> EtlResult<()> {
        let path = self.offset_path(job);
        let tmp_path = self.checkpoint_dir.join(format!("{job}.offset.tmp"));
        let io_error = |err: std::io::Error| {
            etl_error!(
                ErrorKind::CheckpointIoError,
                "Failed to write checkpoint",
                format!("job '{job}' at {}", path.display()),
                source: err
            )
        };

        fs::create_dir_all(&self.checkpoint_dir).await.map_err(io_error)?;

        let mut file = fs::File::create(&tmp_path).await.map_err(io_error)?;
        file.write_all(offset.to_string().as_bytes()).await.map_err(io_error)?;
        file.sync_all().await.map_err(io_error)?;
        drop(file);

        fs::rename(&tmp_path, &path).await.map_err(io_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileCheckpointStore {
        let dir = std::env::temp_dir().join(format!(
            "hotelstream-checkpoint-{name}-{}",
            std::process::id()
        ));
        FileCheckpointStore::new(dir)
    }

    #[tokio::test]
    async fn missing_checkpoint_loads_none() {
        let store = temp_store("missing");
        assert_eq!(store.load("fresh").await.unwrap(), None);
    }

    #[tokio::test]
    async fn offsets_survive_a_rewrite() {
        let store = temp_store("rewrite");
        store.store("job", LogOffset(10)).await.unwrap();
        store.store("job", LogOffset(25)).await.unwrap();
        assert_eq!(store.load("job").await.unwrap(), Some(LogOffset(25)));
    }

    #[tokio::test]
    async fn corrupt_contents_are_an_error() {
        let store = temp_store("corrupt");
        store.store("job", LogOffset(1)).await.unwrap();
        fs::write(store.offset_path("job"), "not a number").await.unwrap();

        let err = store.load("job").await.unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::ConversionError]);
    }
}
