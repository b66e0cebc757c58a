//! `shopfloor-infra`
//!
//! **Responsibility:** Infrastructure implementations behind the domain's
//! store interfaces.
//!
//! The analysis core never talks to storage directly; it receives its
//! measurement window from a [`MeasurementStore`] and its optional limits
//! from a [`SpecificationStore`], both injected by the hosting layer.

pub mod measurement_store;
pub mod specification_store;

pub use measurement_store::{InMemoryMeasurementStore, MeasurementStore, StoreError};
pub use specification_store::{InMemorySpecificationStore, SpecificationStore};
