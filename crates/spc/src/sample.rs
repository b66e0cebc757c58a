//! Input value objects: measurement samples and specification limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfloor_core::{DomainError, DomainResult, ValueObject};

/// A single measured value for a process parameter.
///
/// Supplied by the caller, never mutated by the analysis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSample {
    pub value: f64,
    pub measured_at: DateTime<Utc>,
}

impl MeasurementSample {
    pub fn new(value: f64, measured_at: DateTime<Utc>) -> Self {
        Self { value, measured_at }
    }
}

impl ValueObject for MeasurementSample {}

/// Engineering specification limits for a process parameter.
///
/// One-sided specifications are valid: at least one of the limits must be
/// present, both must be finite, and `upper > lower` when both are given.
/// Validation happens here, once, so the numeric core never handles
/// malformed limits.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationLimits {
    upper_limit: Option<f64>,
    lower_limit: Option<f64>,
}

impl SpecificationLimits {
    pub fn new(upper_limit: Option<f64>, lower_limit: Option<f64>) -> DomainResult<Self> {
        if upper_limit.is_none() && lower_limit.is_none() {
            return Err(DomainError::validation(
                "at least one specification limit (upper or lower) is required",
            ));
        }
        for limit in [upper_limit, lower_limit].into_iter().flatten() {
            if !limit.is_finite() {
                return Err(DomainError::validation(
                    "specification limits must be finite numbers",
                ));
            }
        }
        if let (Some(upper), Some(lower)) = (upper_limit, lower_limit) {
            if upper <= lower {
                return Err(DomainError::invariant(
                    "upper specification limit must be greater than lower",
                ));
            }
        }
        Ok(Self {
            upper_limit,
            lower_limit,
        })
    }

    pub fn two_sided(upper_limit: f64, lower_limit: f64) -> DomainResult<Self> {
        Self::new(Some(upper_limit), Some(lower_limit))
    }

    pub fn upper_limit(&self) -> Option<f64> {
        self.upper_limit
    }

    pub fn lower_limit(&self) -> Option<f64> {
        self.lower_limit
    }

    /// True when `value` lies strictly inside every limit that is present.
    pub fn strictly_within(&self, value: f64) -> bool {
        self.upper_limit.is_none_or(|upper| value < upper)
            && self.lower_limit.is_none_or(|lower| value > lower)
    }
}

impl ValueObject for SpecificationLimits {}
