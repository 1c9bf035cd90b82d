//! Record cleaners, one per source entity.
//!
//! A cleaner is a pure function from a raw row to an optional cleaned
//! record. `None` means the row does not survive its entity's row filter.
//! [`Entity`] ties the cleaners to channel names and to the envelope
//! decoder so the stream worker can treat all entities uniformly.

pub mod chat_whatsapp;
pub mod profile_guest;
pub mod reservation;
pub mod surrogate;
pub mod transaction_resto;

use serde::Serialize;

use crate::error::{ErrorKind, EtlResult};
use crate::etl_error;
use crate::event::decode_change_event;

/// The source entities handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Reservation,
    ProfileGuest,
    ChatWhatsapp,
    TransactionResto,
}

impl Entity {
    /// Every entity, in job-spawn order.
    pub const ALL: &'static [Entity] = &[
        Entity::Reservation,
        Entity::ProfileGuest,
        Entity::ChatWhatsapp,
        Entity::TransactionResto,
    ];

    /// The job name used in configuration and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Reservation => "reservation",
            Entity::ProfileGuest => "profile_guest",
            Entity::ChatWhatsapp => "chat_whatsapp",
            Entity::TransactionResto => "transaction_resto",
        }
    }

    /// Resolves a configured job name.
    pub fn parse(name: &str) -> EtlResult<Entity> {
        match name {
            "reservation" => Ok(Entity::Reservation),
            "profile_guest" => Ok(Entity::ProfileGuest),
            "chat_whatsapp" => Ok(Entity::ChatWhatsapp),
            "transaction_resto" => Ok(Entity::TransactionResto),
            other => Err(etl_error!(
                ErrorKind::ConfigError,
                "Unknown job name",
                format!("no entity is registered under '{other}'")
            )),
        }
    }

    /// Decodes a change-event payload, cleans the row, and serializes the
    /// surviving record.
    ///
    /// `None` covers everything that is dropped by design: malformed
    /// payloads, deletes, snapshot reads, tombstones, and rows rejected by
    /// the entity's row filter.
    pub fn transform(&self, payload: &[u8]) -> Option<Vec<u8>> {
        match self {
            Entity::Reservation => {
                decode_change_event(payload).and_then(reservation::clean).and_then(serialize)
            }
            Entity::ProfileGuest => {
                decode_change_event(payload).and_then(profile_guest::clean).and_then(serialize)
            }
            Entity::ChatWhatsapp => {
                decode_change_event(payload).and_then(chat_whatsapp::clean).and_then(serialize)
            }
            Entity::TransactionResto => decode_change_event(payload)
                .and_then(transaction_resto::clean)
                .and_then(serialize),
        }
    }
}

fn serialize<R: Serialize>(record: R) -> Option<Vec<u8>> {
    serde_json::to_vec(&record).ok()
}
