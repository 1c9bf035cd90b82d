//! In-memory source log for testing and development.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::EtlResult;
use crate::source::{SourceBatch, SourceLog};
use crate::types::LogOffset;

/// In-memory source log.
///
/// Channels are plain vectors behind a mutex, so tests can append events
/// while a stream job is reading and exercise the polling path.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceLog {
    channels: Arc<Mutex<HashMap<String, Vec<Vec<u8>>>>>,
}

impl MemorySourceLog {
    /// Creates an empty source log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a payload to the end of `channel`.
    pub async fn append(&self, channel: &str, payload: Vec<u8>) {
        let mut channels = self.channels.lock().await;
        channels.entry(channel.to_string()).or_default().push(payload);
    }

    /// Appends several payloads to the end of `channel`.
    pub async fn append_all(&self, channel: &str, payloads: Vec<Vec<u8>>) {
        let mut channels = self.channels.lock().await;
        channels.entry(channel.to_string()).or_default().extend(payloads);
    }

    /// Number of events currently in `channel`.
    pub async fn len(&self, channel: &str) -> usize {
        let channels = self.channels.lock().await;
        channels.get(channel).map_or(0, Vec::len)
    }

    /// Returns whether `channel` holds no events.
    pub async fn is_empty(&self, channel: &str) -> bool {
        self.len(channel).await == 0
    }
}

impl SourceLog for MemorySourceLog {
    async fn read_batch(
        &self,
        channel: &str,
        from: LogOffset,
        max_events: u64,
    ) -> EtlResult<SourceBatch> {
        let channels = self.channels.lock().await;
        let Some(events) = channels.get(channel) else {
            return Ok(SourceBatch::empty(from));
        };

        let start = usize::try_from(from.0).unwrap_or(usize::MAX).min(events.len());
        let end = start.saturating_add(usize::try_from(max_events).unwrap_or(usize::MAX));
        let slice: Vec<Vec<u8>> = events[start..end.min(events.len())].to_vec();
        let next_offset = LogOffset(from.0 + slice.len() as u64);

        Ok(SourceBatch {
            events: slice,
            next_offset,
        })
    }
}
