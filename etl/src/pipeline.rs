//! Pipeline supervisor over the per-entity stream jobs.
//!
//! The pipeline owns one stream job per configured entity, all sharing the
//! same source, destination, and checkpoint store. Jobs fail independently;
//! the pipeline reports every failure when waited on and a shutdown signal
//! drains all jobs at their next batch boundary.

use hotelstream_config::shared::{ChannelConfig, ChannelsConfig, PipelineConfig};
use tracing::{error, info};

use crate::bail;
use crate::checkpoint::CheckpointStore;
use crate::cleaners::Entity;
use crate::concurrency::signal::{ShutdownTx, create_shutdown_signal};
use crate::destination::Destination;
use crate::error::{ErrorKind, EtlError, EtlResult};
use crate::source::SourceLog;
use crate::workers::stream::{StreamJob, StreamJobHandle};
use crate::workers::{Worker, WorkerHandle};

enum PipelineState {
    NotStarted,
    Started { handles: Vec<StreamJobHandle> },
}

/// A transformation pipeline over a set of entity stream jobs.
pub struct Pipeline<S, D, C> {
    config: PipelineConfig,
    channels: ChannelsConfig,
    source: S,
    destination: D,
    checkpoints: C,
    shutdown_tx: ShutdownTx,
    state: PipelineState,
}

impl<S, D, C> Pipeline<S, D, C>
where
    S: SourceLog + Clone + Send + Sync + 'static,
    D: Destination + Clone + Send + Sync + 'static,
    C: CheckpointStore + Clone + Send + Sync + 'static,
{
    /// Creates a pipeline in the not-started state.
    pub fn new(
        config: PipelineConfig,
        channels: ChannelsConfig,
        source: S,
        destination: D,
        checkpoints: C,
    ) -> Self {
        let (shutdown_tx, _shutdown_rx) = create_shutdown_signal();

        Self {
            config,
            channels,
            source,
            destination,
            checkpoints,
            shutdown_tx,
            state: PipelineState::NotStarted,
        }
    }

    /// Spawns one stream job per configured entity.
    ///
    /// An empty job list in the configuration means all entities.
    pub async fn start(&mut self) -> EtlResult<()> {
        if let PipelineState::Started { .. } = self.state {
            bail!(
                ErrorKind::InvalidState,
                "Pipeline already started",
                "start() must be called at most once"
            );
        }

        let entities = self.entities()?;
        info!(jobs = entities.len(), "starting pipeline");

        let mut handles = Vec::with_capacity(entities.len());
        for entity in entities {
            let job = StreamJob::new(
                entity,
                channel_config(&self.channels, entity),
                self.config.batch.clone(),
                self.source.clone(),
                self.destination.clone(),
                self.checkpoints.clone(),
                self.shutdown_tx.subscribe(),
            );
            handles.push(job.start().await?);
        }

        self.state = PipelineState::Started { handles };

        Ok(())
    }

    /// Waits for every job to finish, aggregating their failures.
    ///
    /// Jobs normally run until shut down; without a prior [`Pipeline::shutdown`]
    /// this returns only once every job has failed or the signal sender is
    /// dropped.
    pub async fn wait(self) -> EtlResult<()> {
        let PipelineState::Started { handles } = self.state else {
            bail!(
                ErrorKind::InvalidState,
                "Pipeline not started",
                "wait() requires a successful start()"
            );
        };

        let mut errors = Vec::new();
        for handle in handles {
            let entity = handle.state();
            if let Err(err) = handle.wait().await {
                error!(job = entity.name(), "stream job failed: {err}");
                errors.push(err);
            }
        }

        info!("pipeline stopped");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EtlError::from(errors))
        }
    }

    /// Signals every job to stop at its next batch boundary.
    pub fn shutdown(&self) {
        info!("shutting down pipeline");
        // Send fails only when no job is listening anymore, which is
        // already the state shutdown is trying to reach.
        let _ = self.shutdown_tx.send(());
    }

    /// Convenience for [`Pipeline::shutdown`] followed by [`Pipeline::wait`].
    pub async fn shutdown_and_wait(self) -> EtlResult<()> {
        self.shutdown();
        self.wait().await
    }

    /// Returns a handle the embedding process can use to trigger shutdown
    /// from a signal handler while `wait()` is pending.
    pub fn shutdown_tx(&self) -> ShutdownTx {
        self.shutdown_tx.clone()
    }

    fn entities(&self) -> EtlResult<Vec<Entity>> {
        if self.config.jobs.is_empty() {
            return Ok(Entity::ALL.to_vec());
        }
        self.config.jobs.iter().map(|name| Entity::parse(name)).collect()
    }
}

fn channel_config(channels: &ChannelsConfig, entity: Entity) -> ChannelConfig {
    match entity {
        Entity::Reservation => channels.reservation.clone(),
        Entity::ProfileGuest => channels.profile_guest.clone(),
        Entity::ChatWhatsapp => channels.chat_whatsapp.clone(),
        Entity::TransactionResto => channels.transaction_resto.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::memory::MemoryCheckpointStore;
    use crate::destination::memory::MemoryDestination;
    use crate::source::memory::MemorySourceLog;

    fn pipeline(config: PipelineConfig) -> Pipeline<MemorySourceLog, MemoryDestination, MemoryCheckpointStore> {
        Pipeline::new(
            config,
            ChannelsConfig::default(),
            MemorySourceLog::new(),
            MemoryDestination::new(),
            MemoryCheckpointStore::new(),
        )
    }

    #[tokio::test]
    async fn wait_before_start_is_an_error() {
        let pipeline = pipeline(PipelineConfig::default());
        let err = pipeline.wait().await.unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::InvalidState]);
    }

    #[tokio::test]
    async fn double_start_is_an_error() {
        let mut pipeline = pipeline(PipelineConfig::default());
        pipeline.start().await.unwrap();
        let err = pipeline.start().await.unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::InvalidState]);
        pipeline.shutdown_and_wait().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_job_name_fails_startup() {
        let config = PipelineConfig {
            jobs: vec!["laundry".to_string()],
            ..PipelineConfig::default()
        };
        let mut pipeline = pipeline(config);
        let err = pipeline.start().await.unwrap_err();
        assert_eq!(err.kinds(), vec![ErrorKind::ConfigError]);
    }
}
