//! Shutdown signaling between the pipeline and its stream jobs.
//!
//! A thin wrapper over tokio's watch channels. The signal carries no data;
//! sending it tells every job to stop at the next batch boundary. Dropping
//! the transmitter counts as a shutdown too, so a job can never outlive the
//! pipeline that spawned it.

use tokio::sync::watch;

/// Transmitter side of the shutdown signal.
pub type ShutdownTx = watch::Sender<()>;

/// Receiver side of the shutdown signal. Cloneable, one per stream job.
pub type ShutdownRx = watch::Receiver<()>;

/// Creates a shutdown signal channel.
///
/// The channel starts unsignaled: `changed()` on the receiver completes only
/// once [`ShutdownTx::send`] is called or the transmitter is dropped.
pub fn create_shutdown_signal() -> (ShutdownTx, ShutdownRx) {
    let (tx, rx) = watch::channel(());
    (tx, rx)
}

/// Non-blocking check used between batches.
///
/// A closed channel means the pipeline is gone, which is treated as a
/// shutdown request.
pub fn shutdown_requested(rx: &ShutdownRx) -> bool {
    rx.has_changed().unwrap_or(true)
}
