//! Transformer service entry point.
//!
//! Loads configuration from the environment, initializes tracing, starts the
//! async runtime, and runs the transformation pipeline until it is signaled
//! to stop or a stream job fails.

use hotelstream_config::shared::TransformerConfig;
use hotelstream_telemetry::tracing::init_tracing;
use tracing::error;

use crate::config::load_transformer_config;
use crate::core::start_transformer_with_config;
use crate::error::{TransformerError, TransformerResult};

mod config;
mod core;
mod error;

fn main() {
    if let Err(err) = run() {
        eprint!("{}", err.render_report());
        std::process::exit(1);
    }
}

fn run() -> TransformerResult<()> {
    let config = load_transformer_config()?;

    let _log_flusher =
        init_tracing(env!("CARGO_BIN_NAME")).map_err(TransformerError::config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main(config))
}

async fn async_main(config: TransformerConfig) -> TransformerResult<()> {
    if let Err(err) = start_transformer_with_config(config).await {
        error!("{err}");
        return Err(err);
    }

    Ok(())
}
