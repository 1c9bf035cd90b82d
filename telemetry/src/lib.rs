//! Telemetry setup for hotelstream services.

pub mod tracing;
