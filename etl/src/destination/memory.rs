//! In-memory destination for testing and development.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::destination::Destination;
use crate::error::EtlResult;

/// In-memory destination.
///
/// Stores every written batch per channel so tests can inspect exactly what
/// a stream job emitted, in order. Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    channels: Arc<Mutex<HashMap<String, Vec<Vec<u8>>>>>,
}

impl MemoryDestination {
    /// Creates an empty memory destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message written to `channel`, in write order.
    pub async fn messages(&self, channel: &str) -> Vec<Vec<u8>> {
        let channels = self.channels.lock().await;
        channels.get(channel).cloned().unwrap_or_default()
    }

    /// Clears all stored messages, for reuse between tests.
    pub async fn clear(&self) {
        let mut channels = self.channels.lock().await;
        channels.clear();
    }
}

impl Destination for MemoryDestination {
    fn name() -> &'static str {
        "memory"
    }

    async fn write_batch(&self, channel: &str, messages: Vec<Vec<u8>>) -> EtlResult<()> {
        let mut channels = self.channels.lock().await;

        info!("writing a batch of {} messages to '{}'", messages.len(), channel);

        channels.entry(channel.to_string()).or_default().extend(messages);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn batches_accumulate_in_order() {
        let destination = MemoryDestination::new();
        destination
            .write_batch("out", vec![b"1".to_vec(), b"2".to_vec()])
            .await
            .unwrap();
        destination.write_batch("out", vec![b"3".to_vec()]).await.unwrap();

        let messages = destination.messages("out").await;
        assert_eq!(messages, vec![b"1".to_vec(), b"2".to_vec(), b"3".to_vec()]);
        assert!(destination.messages("other").await.is_empty());
    }
}
