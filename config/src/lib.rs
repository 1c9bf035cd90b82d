//! Configuration types and loading for the hotelstream transformer.
//!
//! Configuration is supplied entirely through environment variables with the
//! `APP_` prefix and `__` as the nesting separator (e.g.
//! `APP_PIPELINE__BATCH__MAX_EVENTS_PER_TRIGGER=500`). Defaults cover every
//! key, so an empty environment yields a fully working local configuration.

pub mod load;
pub mod shared;

pub use load::{Config, LoadConfigError, load_config};
