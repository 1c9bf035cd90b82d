//! In-memory checkpoint store for testing and development.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::checkpoint::CheckpointStore;
use crate::error::EtlResult;
use crate::types::LogOffset;

/// In-memory checkpoint store. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCheckpointStore {
    offsets: Arc<Mutex<HashMap<String, LogOffset>>>,
}

impl MemoryCheckpointStore {
    /// Creates an empty checkpoint store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a committed offset, for tests that start mid-stream.
    pub async fn seed(&self, job: &str, offset: LogOffset) {
        let mut offsets = self.offsets.lock().await;
        offsets.insert(job.to_string(), offset);
    }
}

impl CheckpointStore for MemoryCheckpointStore {
    async fn load(&self, job: &str) -> EtlResult<Option<LogOffset>> {
        let offsets = self.offsets.lock().await;
        Ok(offsets.get(job).copied())
    }

    async fn store(&self, job: &str, offset: LogOffset) -> EtlResult<()> {
        let mut offsets = self.offsets.lock().await;
        offsets.insert(job.to_string(), offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offsets_round_trip_per_job() {
        let store = MemoryCheckpointStore::new();
        assert_eq!(store.load("a").await.unwrap(), None);

        store.store("a", LogOffset(5)).await.unwrap();
        store.store("b", LogOffset(2)).await.unwrap();
        store.store("a", LogOffset(7)).await.unwrap();

        assert_eq!(store.load("a").await.unwrap(), Some(LogOffset(7)));
        assert_eq!(store.load("b").await.unwrap(), Some(LogOffset(2)));
    }
}
