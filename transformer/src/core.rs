use hotelstream_config::shared::TransformerConfig;
use hotelstream_etl::checkpoint::CheckpointStore;
use hotelstream_etl::checkpoint::file::FileCheckpointStore;
use hotelstream_etl::destination::Destination;
use hotelstream_etl::destination::file::FileDestination;
use hotelstream_etl::pipeline::Pipeline;
use hotelstream_etl::source::file::{FileSourceLog, ensure_log_dir};
use hotelstream_etl::source::SourceLog;
use tokio::signal::unix::{SignalKind, signal};
use tracing::{info, warn};

use crate::error::{TransformerError, TransformerResult};

/// Starts the transformer service with the provided configuration.
///
/// Wires the file-backed source log, sink, and checkpoint store to a
/// pipeline and runs it until a shutdown signal arrives or a job fails.
pub async fn start_transformer_with_config(config: TransformerConfig) -> TransformerResult<()> {
    info!("starting transformer service");

    log_config(&config);

    ensure_log_dir(&config.storage.log_dir).await?;

    // Sink channels live next to the source channels; the warehouse loader
    // tails them from the same directory.
    let source = FileSourceLog::new(&config.storage.log_dir);
    let destination = FileDestination::new(&config.storage.log_dir);
    let checkpoints = FileCheckpointStore::new(&config.storage.checkpoint_dir);

    let pipeline = Pipeline::new(
        config.pipeline,
        config.channels,
        source,
        destination,
        checkpoints,
    );

    start_pipeline(pipeline).await
}

/// Starts a pipeline and handles graceful shutdown signals.
///
/// SIGINT and SIGTERM both drain the pipeline: jobs finish their current
/// batch, commit, and stop.
async fn start_pipeline<S, D, C>(mut pipeline: Pipeline<S, D, C>) -> TransformerResult<()>
where
    S: SourceLog + Clone + Send + Sync + 'static,
    D: Destination + Clone + Send + Sync + 'static,
    C: CheckpointStore + Clone + Send + Sync + 'static,
{
    pipeline.start().await?;

    let shutdown_tx = pipeline.shutdown_tx();
    let shutdown_handle = tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(err) => {
                warn!(error = ?err, "failed to register sigterm handler");
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("sigint (ctrl+c) received, shutting down pipeline");
            }
            _ = sigterm.recv() => {
                info!("sigterm received, shutting down pipeline");
            }
        }

        let _ = shutdown_tx.send(());
    });

    let result = pipeline.wait().await;

    // If the pipeline finished before any signal arrived, the listener task
    // is still pending and must not keep the process alive.
    shutdown_handle.abort();

    result.map_err(TransformerError::from)
}

fn log_config(config: &TransformerConfig) {
    let jobs: Vec<&str> = if config.pipeline.jobs.is_empty() {
        hotelstream_config::shared::KNOWN_JOBS.to_vec()
    } else {
        config.pipeline.jobs.iter().map(String::as_str).collect()
    };

    info!(
        jobs = ?jobs,
        max_events_per_trigger = config.pipeline.batch.max_events_per_trigger,
        poll_interval_ms = config.pipeline.batch.poll_interval_ms,
        log_dir = %config.storage.log_dir.display(),
        checkpoint_dir = %config.storage.checkpoint_dir.display(),
        "transformer configuration loaded"
    );
}
