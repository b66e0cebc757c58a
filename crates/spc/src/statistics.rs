//! Descriptive statistics for a measurement window.

use serde::{Deserialize, Serialize};

use crate::error::SpcError;

/// Minimum window size for a statistically meaningful analysis.
///
/// Windows below this floor are rejected outright rather than producing
/// limits estimated from too few samples.
pub const MIN_SAMPLES: usize = 20;

/// Descriptive statistics of a measurement window.
///
/// `std_dev` uses the sample (n-1) estimator; the [`MIN_SAMPLES`] floor
/// guarantees the divisor is never zero.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub count: usize,
}

impl Statistics {
    /// Compute statistics over a value sequence.
    ///
    /// Pure function of the input; the only failure is a window smaller
    /// than [`MIN_SAMPLES`].
    pub fn from_values(values: &[f64]) -> Result<Self, SpcError> {
        if values.len() < MIN_SAMPLES {
            return Err(SpcError::InsufficientData {
                required: MIN_SAMPLES,
                available: values.len(),
            });
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / (count - 1) as f64;
        let std_dev = variance.sqrt();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean,
            std_dev,
            variance,
            min,
            max,
            range: max - min,
            count,
        })
    }
}
