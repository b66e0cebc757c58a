use std::sync::Arc;

use shopfloor_infra::{
    InMemoryMeasurementStore, InMemorySpecificationStore, MeasurementStore, SpecificationStore,
};

/// Store collaborators shared by all handlers.
///
/// Handlers depend on the store traits only; swapping the in-memory
/// implementations for persistent ones is wiring, not handler changes.
pub struct AppServices {
    measurements: Arc<dyn MeasurementStore>,
    specifications: Arc<dyn SpecificationStore>,
}

impl AppServices {
    pub fn new(
        measurements: Arc<dyn MeasurementStore>,
        specifications: Arc<dyn SpecificationStore>,
    ) -> Self {
        Self {
            measurements,
            specifications,
        }
    }

    pub fn measurements(&self) -> &dyn MeasurementStore {
        self.measurements.as_ref()
    }

    pub fn specifications(&self) -> &dyn SpecificationStore {
        self.specifications.as_ref()
    }
}

/// In-memory store wiring (dev/test).
pub fn build_services() -> AppServices {
    AppServices::new(
        Arc::new(InMemoryMeasurementStore::new()),
        Arc::new(InMemorySpecificationStore::new()),
    )
}
