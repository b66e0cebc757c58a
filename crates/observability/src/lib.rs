//! `shopfloor-observability`
//!
//! **Responsibility:** Process-wide logging/tracing setup.

pub mod tracing;

pub use tracing::init;
