//! Change-data-capture envelope decoding.
//!
//! Source channels carry Debezium-style envelopes: a JSON object with the row
//! image under `after` and a single-letter operation code under `op`. Only
//! creates and updates flow downstream; deletes and snapshot reads are
//! dropped at the door.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Operation code of a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    Create,
    Update,
    Delete,
    Read,
    Unknown,
}

impl<'de> Deserialize<'de> for ChangeOp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(match code.as_str() {
            "c" => ChangeOp::Create,
            "u" => ChangeOp::Update,
            "d" => ChangeOp::Delete,
            "r" => ChangeOp::Read,
            _ => ChangeOp::Unknown,
        })
    }
}

/// A decoded change event carrying the post-image of a row.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "R: DeserializeOwned"))]
pub struct ChangeEvent<R> {
    #[serde(default)]
    pub after: Option<R>,
    #[serde(default)]
    pub op: Option<ChangeOp>,
}

/// Decodes an envelope and returns the row image for creates and updates.
///
/// Malformed payloads, tombstones, deletes, snapshot reads, unknown ops, and
/// envelopes with a missing `after` all come back as `None`; a poisoned
/// message never stops the stream.
pub fn decode_change_event<R>(payload: &[u8]) -> Option<R>
where
    R: DeserializeOwned,
{
    let event: ChangeEvent<R> = serde_json::from_slice(payload).ok()?;
    match event.op {
        Some(ChangeOp::Create) | Some(ChangeOp::Update) => event.after,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn create_and_update_yield_the_row() {
        let created: Option<Row> = decode_change_event(br#"{"after":{"id":1},"op":"c"}"#);
        assert_eq!(created, Some(Row { id: 1 }));

        let updated: Option<Row> = decode_change_event(br#"{"after":{"id":2},"op":"u"}"#);
        assert_eq!(updated, Some(Row { id: 2 }));
    }

    #[test]
    fn delete_and_read_are_dropped() {
        let deleted: Option<Row> = decode_change_event(br#"{"after":null,"op":"d"}"#);
        assert_eq!(deleted, None);

        let snapshot: Option<Row> = decode_change_event(br#"{"after":{"id":3},"op":"r"}"#);
        assert_eq!(snapshot, None);
    }

    #[test]
    fn unknown_op_and_missing_fields_are_dropped() {
        let odd: Option<Row> = decode_change_event(br#"{"after":{"id":4},"op":"t"}"#);
        assert_eq!(odd, None);

        let missing_op: Option<Row> = decode_change_event(br#"{"after":{"id":5}}"#);
        assert_eq!(missing_op, None);

        let missing_after: Option<Row> = decode_change_event(br#"{"op":"c"}"#);
        assert_eq!(missing_after, None);
    }

    #[test]
    fn malformed_payloads_are_dropped() {
        let garbage: Option<Row> = decode_change_event(b"not json");
        assert_eq!(garbage, None);

        let wrong_shape: Option<Row> = decode_change_event(br#"[1,2,3]"#);
        assert_eq!(wrong_shape, None);
    }
}
