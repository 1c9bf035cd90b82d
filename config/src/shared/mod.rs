//! Shared configuration types for the transformer service.

mod batch;
mod channels;
mod pipeline;
mod storage;
mod transformer;

use thiserror::Error;

pub use batch::BatchConfig;
pub use channels::{ChannelConfig, ChannelsConfig};
pub use pipeline::{KNOWN_JOBS, PipelineConfig};
pub use storage::StorageConfig;
pub use transformer::TransformerConfig;

/// Errors raised when validating configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field contains a value that violates its constraint.
    #[error("invalid value for `{field}`: {constraint}")]
    InvalidFieldValue { field: String, constraint: String },
}
