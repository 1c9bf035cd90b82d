//! Concurrency primitives shared by workers and the pipeline.

pub mod signal;
