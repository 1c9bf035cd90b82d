//! Stream job worker: the micro-batch loop for one entity.
//!
//! A stream job reads a slice of its source channel, transforms each change
//! event through the entity's cleaner, writes the surviving records to the
//! sink channel, and only then commits its checkpoint. A crash between
//! write and commit replays the batch on restart; the cleaners are
//! deterministic and the sink append-only, so replays are harmless
//! duplicates rather than corruption.

use hotelstream_config::shared::{BatchConfig, ChannelConfig};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span};

use crate::checkpoint::CheckpointStore;
use crate::cleaners::Entity;
use crate::concurrency::signal::{ShutdownRx, shutdown_requested};
use crate::destination::Destination;
use crate::error::{ErrorKind, EtlError, EtlResult};
use crate::etl_error;
use crate::source::SourceLog;
use crate::types::LogOffset;
use crate::workers::{Worker, WorkerHandle};

/// A stream job for a single entity, ready to be started.
#[derive(Debug)]
pub struct StreamJob<S, D, C> {
    entity: Entity,
    channels: ChannelConfig,
    batch: BatchConfig,
    source: S,
    destination: D,
    checkpoints: C,
    shutdown_rx: ShutdownRx,
}

impl<S, D, C> StreamJob<S, D, C>
where
    S: SourceLog + Send + Sync + 'static,
    D: Destination + Send + Sync + 'static,
    C: CheckpointStore + Send + Sync + 'static,
{
    pub fn new(
        entity: Entity,
        channels: ChannelConfig,
        batch: BatchConfig,
        source: S,
        destination: D,
        checkpoints: C,
        shutdown_rx: ShutdownRx,
    ) -> Self {
        Self {
            entity,
            channels,
            batch,
            source,
            destination,
            checkpoints,
            shutdown_rx,
        }
    }

    async fn run(mut self) -> EtlResult<()> {
        let job = self.entity.name();
        let poll_interval = Duration::from_millis(self.batch.poll_interval_ms);
        let max_events = self.batch.max_events_per_trigger as u64;

        let mut offset = self
            .checkpoints
            .load(job)
            .await?
            .unwrap_or(LogOffset::EARLIEST);

        info!(
            source_topic = %self.channels.source_topic,
            sink_topic = %self.channels.sink_topic,
            %offset,
            "stream job started"
        );

        loop {
            // Shutdown lands only at batch boundaries; a batch that has
            // started is always carried through to its checkpoint.
            if shutdown_requested(&self.shutdown_rx) {
                break;
            }

            let batch = self
                .source
                .read_batch(&self.channels.source_topic, offset, max_events)
                .await?;

            if batch.events.is_empty() {
                tokio::select! {
                    _ = self.shutdown_rx.changed() => break,
                    _ = tokio::time::sleep(poll_interval) => {}
                }
                continue;
            }

            let read = batch.events.len();
            let messages: Vec<Vec<u8>> = batch
                .events
                .iter()
                .filter_map(|payload| self.entity.transform(payload))
                .collect();
            let emitted = messages.len();

            if !messages.is_empty() {
                self.destination
                    .write_batch(&self.channels.sink_topic, messages)
                    .await?;
            }

            offset = batch.next_offset;
            self.checkpoints.store(job, offset).await?;

            debug!(read, emitted, %offset, "micro-batch committed");
        }

        info!(%offset, "stream job stopped");

        Ok(())
    }
}

impl<S, D, C> Worker<StreamJobHandle, Entity> for StreamJob<S, D, C>
where
    S: SourceLog + Send + Sync + 'static,
    D: Destination + Send + Sync + 'static,
    C: CheckpointStore + Send + Sync + 'static,
{
    type Error = EtlError;

    async fn start(self) -> EtlResult<StreamJobHandle> {
        let entity = self.entity;
        let span = info_span!("stream_job", job = entity.name());
        let handle = tokio::spawn(self.run().instrument(span));

        Ok(StreamJobHandle { entity, handle })
    }
}

/// Handle to a spawned stream job.
#[derive(Debug)]
pub struct StreamJobHandle {
    entity: Entity,
    handle: JoinHandle<EtlResult<()>>,
}

impl WorkerHandle<Entity> for StreamJobHandle {
    fn state(&self) -> Entity {
        self.entity
    }

    async fn wait(self) -> EtlResult<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => Err(etl_error!(
                ErrorKind::StreamJobPanic,
                "Stream job terminated abnormally",
                format!("job '{}': {err}", self.entity.name())
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::memory::MemoryCheckpointStore;
    use crate::concurrency::signal::create_shutdown_signal;
    use crate::destination::memory::MemoryDestination;
    use crate::source::memory::MemorySourceLog;

    fn channels() -> ChannelConfig {
        ChannelConfig {
            source_topic: "raw".to_string(),
            sink_topic: "cleaned".to_string(),
        }
    }

    #[tokio::test]
    async fn processes_events_and_commits_checkpoint() {
        let source = MemorySourceLog::new();
        let destination = MemoryDestination::new();
        let checkpoints = MemoryCheckpointStore::new();
        let (shutdown_tx, shutdown_rx) = create_shutdown_signal();

        source
            .append(
                "raw",
                br#"{"after":{"id":1,"bill_number":"B-1"},"op":"c"}"#.to_vec(),
            )
            .await;
        source
            .append("raw", br#"{"after":{"id":2},"op":"d"}"#.to_vec())
            .await;

        let job = StreamJob::new(
            Entity::TransactionResto,
            channels(),
            BatchConfig::default(),
            source,
            destination.clone(),
            checkpoints.clone(),
            shutdown_rx,
        );
        let handle = job.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown_tx.send(()).unwrap();
        handle.wait().await.unwrap();

        let messages = destination.messages("cleaned").await;
        assert_eq!(messages.len(), 1);
        assert_eq!(
            checkpoints.load("transaction_resto").await.unwrap(),
            Some(LogOffset(2))
        );
    }

    #[tokio::test]
    async fn resumes_from_committed_offset() {
        let source = MemorySourceLog::new();
        let destination = MemoryDestination::new();
        let checkpoints = MemoryCheckpointStore::new();
        let (shutdown_tx, shutdown_rx) = create_shutdown_signal();

        for id in 1..=3 {
            let payload = format!(r#"{{"after":{{"id":{id}}},"op":"c"}}"#);
            source.append("raw", payload.into_bytes()).await;
        }
        checkpoints.seed("transaction_resto", LogOffset(2)).await;

        let job = StreamJob::new(
            Entity::TransactionResto,
            channels(),
            BatchConfig::default(),
            source,
            destination.clone(),
            checkpoints.clone(),
            shutdown_rx,
        );
        let handle = job.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown_tx.send(()).unwrap();
        handle.wait().await.unwrap();

        let messages = destination.messages("cleaned").await;
        assert_eq!(messages.len(), 1);
        let value: serde_json::Value = serde_json::from_slice(&messages[0]).unwrap();
        assert_eq!(value["id"], 3);
    }

    #[tokio::test]
    async fn idle_job_stops_on_shutdown() {
        let (shutdown_tx, shutdown_rx) = create_shutdown_signal();
        let job = StreamJob::new(
            Entity::Reservation,
            channels(),
            BatchConfig::default(),
            MemorySourceLog::new(),
            MemoryDestination::new(),
            MemoryCheckpointStore::new(),
            shutdown_rx,
        );
        let handle = job.start().await.unwrap();
        assert_eq!(handle.state(), Entity::Reservation);

        shutdown_tx.send(()).unwrap();
        handle.wait().await.unwrap();
    }
}
