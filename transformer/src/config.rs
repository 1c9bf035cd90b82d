use hotelstream_config::load_config;
use hotelstream_config::shared::TransformerConfig;

use crate::error::{TransformerError, TransformerResult};

/// Loads and validates the transformer configuration from the environment.
pub fn load_transformer_config() -> TransformerResult<TransformerConfig> {
    let config = load_config::<TransformerConfig>().map_err(TransformerError::config)?;
    config.validate().map_err(TransformerError::config)?;

    Ok(config)
}
