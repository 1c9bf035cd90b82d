use std::future::Future;

use crate::error::EtlResult;
use crate::types::LogOffset;

/// Trait for storing and retrieving per-job read positions.
///
/// A checkpoint records how far a job has read its source channel, and is
/// written only after the corresponding batch was acknowledged by the sink.
/// Losing a checkpoint is therefore safe (the job replays), while a
/// checkpoint ahead of the sink would silently drop data. Implementations
/// must persist atomically with respect to crashes.
pub trait CheckpointStore {
    /// Loads the committed offset for `job`, or `None` when the job has
    /// never committed.
    fn load(&self, job: &str) -> impl Future<Output = EtlResult<Option<LogOffset>>> + Send;

    /// Durably records `offset` as the committed position for `job`.
    fn store(&self, job: &str, offset: LogOffset) -> impl Future<Output = EtlResult<()>> + Send;
}
