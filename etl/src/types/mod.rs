//! Core data types: raw row payloads, cleaned records, and log positions.

mod records;
mod rows;
mod scalar;

pub use records::{
    ChatWhatsappRecord, ProfileGuestRecord, ReservationRecord, TransactionRestoRecord,
};
pub use rows::{ChatWhatsappRow, ProfileGuestRow, ReservationRow, TransactionRestoRow};
pub use scalar::Scalar;
pub(crate) use scalar::to_text;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in a source log, counted in events from the start of the channel.
///
/// An offset of `n` means the next event to read is the `n`-th event of the
/// channel; `LogOffset::EARLIEST` reads from the beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogOffset(pub u64);

impl LogOffset {
    /// The earliest available position of a channel.
    pub const EARLIEST: LogOffset = LogOffset(0);
}

impl fmt::Display for LogOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
