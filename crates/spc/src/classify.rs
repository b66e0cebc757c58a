//! Point classification against control limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::limits::ControlLimits;
use crate::sample::MeasurementSample;

/// Control-chart status of a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointStatus {
    Normal,
    Warning,
    OutOfControl,
}

impl PointStatus {
    /// Classify a value against the control limits.
    ///
    /// Total over f64: out-of-control beyond the 3-sigma band, warning
    /// beyond the 2-sigma band, normal otherwise. Values exactly on a band
    /// edge belong to the milder class.
    pub fn classify(value: f64, limits: &ControlLimits) -> Self {
        if value > limits.ucl || value < limits.lcl {
            Self::OutOfControl
        } else if value > limits.uwl || value < limits.lwl {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// A measurement sample together with its classification.
///
/// Derived from its source sample; never stored independently of it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedPoint {
    pub measured_at: DateTime<Utc>,
    pub value: f64,
    pub status: PointStatus,
}

/// Classify every sample in the window. Each value receives exactly one
/// classification.
pub fn classify_points(
    samples: &[MeasurementSample],
    limits: &ControlLimits,
) -> Vec<ClassifiedPoint> {
    samples
        .iter()
        .map(|sample| ClassifiedPoint {
            measured_at: sample.measured_at,
            value: sample.value,
            status: PointStatus::classify(sample.value, limits),
        })
        .collect()
}
