//! Measurement storage interface and the in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use shopfloor_core::{ParameterName, ProductId, TenantId};
use shopfloor_spc::MeasurementSample;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Key of a measurement series: one monitored parameter of one product,
/// scoped to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    pub tenant_id: TenantId,
    pub product_id: ProductId,
    pub parameter: ParameterName,
}

/// Supplies measurement windows for SPC analysis.
///
/// `recent_window` returns up to `limit` of the most recent samples,
/// newest first; the analysis engine re-sorts chronologically on its own.
pub trait MeasurementStore: Send + Sync {
    fn record(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        sample: MeasurementSample,
    ) -> Result<(), StoreError>;

    fn recent_window(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        limit: usize,
    ) -> Result<Vec<MeasurementSample>, StoreError>;
}

/// In-memory measurement store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryMeasurementStore {
    series: RwLock<HashMap<SeriesKey, Vec<MeasurementSample>>>,
}

impl InMemoryMeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeasurementStore for InMemoryMeasurementStore {
    fn record(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        sample: MeasurementSample,
    ) -> Result<(), StoreError> {
        let key = SeriesKey {
            tenant_id,
            product_id,
            parameter: parameter.clone(),
        };

        let mut series = self
            .series
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;

        let samples = series.entry(key).or_default();
        // Keep the series sorted chronologically; samples may arrive late.
        let position = samples.partition_point(|s| s.measured_at <= sample.measured_at);
        samples.insert(position, sample);

        Ok(())
    }

    fn recent_window(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        parameter: &ParameterName,
        limit: usize,
    ) -> Result<Vec<MeasurementSample>, StoreError> {
        let key = SeriesKey {
            tenant_id,
            product_id,
            parameter: parameter.clone(),
        };

        let series = self
            .series
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;

        let samples = series.get(&key).map(Vec::as_slice).unwrap_or_default();
        let window: Vec<MeasurementSample> =
            samples.iter().rev().take(limit).copied().collect();

        Ok(window)
    }
}
