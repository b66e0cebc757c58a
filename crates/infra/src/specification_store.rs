//! Specification-limit storage interface and the in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use shopfloor_core::{ParameterName, ProductId, TenantId};
use shopfloor_spc::SpecificationLimits;

use crate::measurement_store::{SeriesKey, StoreError};

/// Supplies optional engineering specification limits per series.
///
/// Limits are optional by design: a parameter can be monitored for
/// stability before a specification is agreed.
pub trait SpecificationStore: Send + Sync {
    fn put(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        limits: SpecificationLimits,
    ) -> Result<(), StoreError>;

    fn get(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
    ) -> Result<Option<SpecificationLimits>, StoreError>;
}

/// In-memory specification store.
///
/// Intended for tests/dev. A `put` replaces any previous limits for the
/// series.
#[derive(Debug, Default)]
pub struct InMemorySpecificationStore {
    limits: RwLock<HashMap<SeriesKey, SpecificationLimits>>,
}

impl InMemorySpecificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpecificationStore for InMemorySpecificationStore {
    fn put(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        limits: SpecificationLimits,
    ) -> Result<(), StoreError> {
        let key = SeriesKey {
            tenant_id,
            product_id,
            parameter: parameter.clone(),
        };

        let mut map = self
            .limits
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        map.insert(key, limits);

        Ok(())
    }

    fn get(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
    ) -> Result<Option<SpecificationLimits>, StoreError> {
        let key = SeriesKey {
            tenant_id,
            product_id,
            parameter: parameter.clone(),
        };

        let map = self
            .limits
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;

        Ok(map.get(&key).copied())
    }
}
