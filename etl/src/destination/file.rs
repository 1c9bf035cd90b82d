//! File-backed destination.
//!
//! Appends records as newline-delimited JSON, one file per sink channel.
//! The file is synced before a write is acknowledged so a checkpoint never
//! outruns the data it covers.

use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::destination::Destination;
use crate::error::{ErrorKind, EtlResult};
use crate::etl_error;

/// Destination over per-channel JSONL files.
#[derive(Debug, Clone)]
pub struct FileDestination {
    out_dir: PathBuf,
}

impl FileDestination {
    /// Creates a destination rooted at `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn channel_path(&self, channel: &str) -> PathBuf {
        self.out_dir.join(format!("{channel}.jsonl"))
    }
}

impl Destination for FileDestination {
    fn name() -> &'static str {
        "file"
    }

    async fn write_batch(&self, channel: &str, messages: Vec<Vec<u8>>) -> EtlResult<()> {
        let path = self.channel_path(channel);
        let io_error = |err: std::io::Error| {
            etl_error!(
                ErrorKind::DestinationIoError,
                "Failed to write sink channel",
                format!("channel '{channel}' at {}", path.display()),
                source: err
            )
        };

        fs::create_dir_all(&self.out_dir).await.map_err(io_error)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(io_error)?;
        for message in &messages {
            file.write_all(message).await.map_err(io_error)?;
            file.write_all(b"\n").await.map_err(io_error)?;
        }
        file.sync_all().await.map_err(io_error)?;

        Ok(())
    }
}
