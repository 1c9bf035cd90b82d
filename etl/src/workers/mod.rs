//! Background workers that move data through the pipeline.

mod base;
pub mod stream;

pub use base::{Worker, WorkerHandle};
