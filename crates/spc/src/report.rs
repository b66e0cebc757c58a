//! Report assembly: one immutable report per analysis call.

use serde::{Deserialize, Serialize};

use crate::capability::CapabilityResult;
use crate::classify::{ClassifiedPoint, PointStatus, classify_points};
use crate::error::SpcError;
use crate::limits::ControlLimits;
use crate::patterns::{Pattern, Trend, detect_pattern, detect_trend};
use crate::sample::{MeasurementSample, SpecificationLimits};
use crate::statistics::Statistics;

/// Chart-level summary of the classified window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub in_control: bool,
    pub out_of_control_points: usize,
    pub warning_points: usize,
    pub trend: Trend,
    pub pattern: Pattern,
}

/// Full SPC analysis report.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpcReport {
    pub statistics: Statistics,
    pub control_limits: ControlLimits,
    pub process_capability: CapabilityResult,
    pub analysis: AnalysisSummary,
    pub data: Vec<ClassifiedPoint>,
}

/// Analyze a measurement window.
///
/// Works on a private chronologically-sorted copy (oldest first), so the
/// caller may supply samples in any order - stores typically hand back
/// newest-first windows. Deterministic: identical input yields an
/// identical report.
///
/// The only failure is [`SpcError::InsufficientData`], propagated from the
/// statistics floor.
pub fn analyze(
    samples: &[MeasurementSample],
    spec_limits: Option<&SpecificationLimits>,
) -> Result<SpcReport, SpcError> {
    let mut ordered = samples.to_vec();
    ordered.sort_by_key(|sample| sample.measured_at);

    let values: Vec<f64> = ordered.iter().map(|sample| sample.value).collect();

    let statistics = Statistics::from_values(&values)?;
    let control_limits = ControlLimits::from_statistics(&statistics);
    let data = classify_points(&ordered, &control_limits);

    let out_of_control_points = data
        .iter()
        .filter(|point| point.status == PointStatus::OutOfControl)
        .count();
    let warning_points = data
        .iter()
        .filter(|point| point.status == PointStatus::Warning)
        .count();

    let analysis = AnalysisSummary {
        in_control: out_of_control_points == 0,
        out_of_control_points,
        warning_points,
        trend: detect_trend(&values),
        pattern: detect_pattern(&values, statistics.mean),
    };

    Ok(SpcReport {
        statistics,
        control_limits,
        process_capability: CapabilityResult::assess(&statistics, spec_limits),
        analysis,
        data,
    })
}
