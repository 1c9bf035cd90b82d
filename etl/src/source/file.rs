//! File-backed source log.
//!
//! Each channel is a newline-delimited file of JSON payloads under the log
//! directory, the layout produced by the capture agent. The file is re-read
//! on every poll; offsets are line numbers.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{ErrorKind, EtlResult};
use crate::etl_error;
use crate::source::{SourceBatch, SourceLog};
use crate::types::LogOffset;

/// Source log over per-channel JSONL files.
#[derive(Debug, Clone)]
pub struct FileSourceLog {
    log_dir: PathBuf,
}

impl FileSourceLog {
    /// Creates a source log rooted at `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    fn channel_path(&self, channel: &str) -> PathBuf {
        self.log_dir.join(format!("{channel}.jsonl"))
    }
}

impl SourceLog for FileSourceLog {
    async fn read_batch(
        &self,
        channel: &str,
        from: LogOffset,
        max_events: u64,
    ) -> EtlResult<SourceBatch> {
        let path = self.channel_path(channel);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            // A channel nobody has written to yet is empty, not broken.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SourceBatch::empty(from));
            }
            Err(err) => {
                return Err(etl_error!(
                    ErrorKind::SourceIoError,
                    "Failed to read source channel",
                    format!("channel '{channel}' at {}", path.display()),
                    source: err
                ));
            }
        };

        let skip = usize::try_from(from.0).unwrap_or(usize::MAX);
        let take = usize::try_from(max_events).unwrap_or(usize::MAX);
        let events: Vec<Vec<u8>> = contents
            .lines()
            .skip(skip)
            .take(take)
            .map(|line| line.as_bytes().to_vec())
            .collect();
        let next_offset = LogOffset(from.0 + events.len() as u64);

        Ok(SourceBatch {
            events,
            next_offset,
        })
    }
}

/// Creates the log directory if it does not exist yet.
pub async fn ensure_log_dir(log_dir: &Path) -> EtlResult<()> {
    fs::create_dir_all(log_dir).await.map_err(|err| {
        etl_error!(
            ErrorKind::SourceIoError,
            "Failed to create log directory",
            format!("at {}", log_dir.display()),
            source: err
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hotelstream-source-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).await.unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_channel_reads_empty() {
        let dir = temp_dir("missing").await;
        let log = FileSourceLog::new(&dir);
        let batch = log.read_batch("nothing", LogOffset::EARLIEST, 10).await.unwrap();
        assert!(batch.events.is_empty());
        assert_eq!(batch.next_offset, LogOffset::EARLIEST);
    }

    #[tokio::test]
    async fn lines_map_to_offsets() {
        let dir = temp_dir("lines").await;
        let log = FileSourceLog::new(&dir);
        fs::write(dir.join("orders.jsonl"), "{\"a\":1}\n{\"a\":2}\n{\"a\":3}\n")
            .await
            .unwrap();

        let batch = log.read_batch("orders", LogOffset(1), 1).await.unwrap();
        assert_eq!(batch.events, vec![br#"{"a":2}"#.to_vec()]);
        assert_eq!(batch.next_offset, LogOffset(2));
    }
}
