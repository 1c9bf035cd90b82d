use std::future::Future;

use crate::error::EtlResult;

/// Trait for systems that receive cleaned records from stream jobs.
///
/// A destination appends serialized records to a named sink channel. The
/// write must be durable before it returns `Ok`: the stream job advances its
/// checkpoint only after a successful write, so an acknowledged batch that
/// was silently dropped would be lost for good. Conversely, implementations
/// must tolerate replays of an already-written batch, since a crash between
/// write and checkpoint re-delivers it.
pub trait Destination {
    /// Returns the name of the destination, for logs.
    fn name() -> &'static str;

    /// Appends a batch of serialized records to `channel`, in order.
    fn write_batch(
        &self,
        channel: &str,
        messages: Vec<Vec<u8>>,
    ) -> impl Future<Output = EtlResult<()>> + Send;
}
