//! Control-chart limits derived from window statistics.

use serde::{Deserialize, Serialize};

use crate::statistics::Statistics;

/// Warning band width in standard deviations.
pub const WARNING_SIGMA: f64 = 2.0;

/// Control band width in standard deviations.
pub const CONTROL_SIGMA: f64 = 3.0;

/// Shewhart-style control limits for an individuals chart.
///
/// Invariant: `ucl >= uwl >= center_line >= lwl >= lcl` (all bands collapse
/// onto the center line when the window has zero variance).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlLimits {
    pub center_line: f64,
    pub ucl: f64,
    pub lcl: f64,
    pub uwl: f64,
    pub lwl: f64,
}

impl ControlLimits {
    /// Derive control limits from window statistics. Pure arithmetic; total
    /// once `Statistics` exists.
    pub fn from_statistics(statistics: &Statistics) -> Self {
        let center_line = statistics.mean;
        let spread = statistics.std_dev;
        Self {
            center_line,
            ucl: center_line + CONTROL_SIGMA * spread,
            lcl: center_line - CONTROL_SIGMA * spread,
            uwl: center_line + WARNING_SIGMA * spread,
            lwl: center_line - WARNING_SIGMA * spread,
        }
    }
}
