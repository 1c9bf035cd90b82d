//! Streaming CDC-to-warehouse transformation engine for hotel operational data.
//!
//! Consumes append-only change events from per-entity source logs, applies
//! field-level cleaning and normalization, and emits cleaned JSON records to
//! per-entity sink logs with checkpointed, at-least-once delivery.

pub mod checkpoint;
pub mod cleaners;
pub mod concurrency;
pub mod destination;
pub mod error;
pub mod event;
mod macros;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod workers;
