use std::future::Future;

use crate::error::EtlResult;

/// Trait for background workers in the pipeline.
///
/// A worker starts background processing and returns a handle for monitoring
/// it. The generic parameter `H` is the handle type returned at startup and
/// `S` is the state type the handle exposes.
pub trait Worker<H, S>
where
    H: WorkerHandle<S>,
{
    /// Error type returned when worker startup fails.
    type Error;

    /// Starts the worker and returns a handle for monitoring its execution.
    fn start(self) -> impl Future<Output = Result<H, Self::Error>> + Send;
}

/// Handle for monitoring a running worker.
///
/// The handle outlives the worker, so its final result can be collected
/// after completion.
pub trait WorkerHandle<S> {
    /// Returns a snapshot of the worker's identity or progress.
    fn state(&self) -> S;

    /// Waits for the worker to complete and returns the final result.
    ///
    /// Consumes the handle. A worker that panicked reports the panic as an
    /// error rather than propagating it.
    fn wait(self) -> impl Future<Output = EtlResult<()>> + Send;
}
