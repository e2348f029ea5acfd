//! `atelier-observability` — logging/tracing setup.

pub mod tracing;

pub use tracing::{init, init_with};
