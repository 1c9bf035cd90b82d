use std::future::Future;

use crate::error::EtlResult;
use crate::types::LogOffset;

/// A contiguous slice of a source channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBatch {
    /// Raw change-event payloads, in channel order.
    pub events: Vec<Vec<u8>>,
    /// The offset to resume from after this batch is committed.
    pub next_offset: LogOffset,
}

impl SourceBatch {
    /// An empty batch that leaves the read position where it was.
    pub fn empty(at: LogOffset) -> Self {
        Self {
            events: Vec::new(),
            next_offset: at,
        }
    }
}

/// Trait for ordered, replayable sources of change events.
///
/// A source log is an append-only sequence of payloads per channel that can
/// be re-read from any retained offset. Reading must not consume: the same
/// offset read twice returns the same events, which is what makes
/// at-least-once delivery with checkpoint replay possible.
pub trait SourceLog {
    /// Reads up to `max_events` payloads from `channel` starting at `from`.
    ///
    /// Reading at or past the end of the channel returns an empty batch with
    /// `next_offset == from`.
    fn read_batch(
        &self,
        channel: &str,
        from: LogOffset,
        max_events: u64,
    ) -> impl Future<Output = EtlResult<SourceBatch>> + Send;
}
