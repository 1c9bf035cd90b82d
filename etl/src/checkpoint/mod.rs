//! Checkpoint store abstractions and implementations.

mod base;
pub mod file;
pub mod memory;

pub use base::CheckpointStore;
