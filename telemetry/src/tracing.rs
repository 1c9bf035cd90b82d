//! Tracing initialization shared by service binaries.
//!
//! Logs go to stdout through a non-blocking writer so slow terminals or
//! redirected pipes never stall a stream job. The returned guard flushes
//! buffered lines on drop and must be held for the lifetime of the process.

use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global tracing subscriber.
#[derive(Debug, Error)]
pub enum TracingSetupError {
    /// A global subscriber was already installed.
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalDefault(#[from] SetGlobalDefaultError),
}

/// Initializes tracing for a service binary.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`
/// otherwise.
pub fn init_tracing(service_name: &str) -> Result<WorkerGuard, TracingSetupError> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(service = service_name, "tracing initialized");

    Ok(guard)
}
