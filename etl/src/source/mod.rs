//! Source log abstractions and implementations.

mod base;
pub mod file;
pub mod memory;

pub use base::{SourceBatch, SourceLog};
