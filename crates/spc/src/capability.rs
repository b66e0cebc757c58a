//! Process capability against specification limits.

use serde::{Deserialize, Serialize};

use crate::sample::SpecificationLimits;
use crate::statistics::Statistics;

/// Cpk at or above this is a capable process.
pub const CAPABLE_MIN_CPK: f64 = 1.33;

/// Cpk at or above this (but below [`CAPABLE_MIN_CPK`]) is marginal.
pub const MARGINAL_MIN_CPK: f64 = 1.0;

/// Qualitative reading of the capability indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityInterpretation {
    Capable,
    MarginallyCapable,
    NotCapable,
    NoSpecificationLimits,
}

/// Capability analysis result.
///
/// `cp` requires both specification limits; `cpk` requires at least one.
/// Indices are `None` (JSON `null`) whenever they cannot be computed - the
/// report never carries `NaN` or infinities.
///
/// Zero-variance policy: when the window has no spread at all, the indices
/// are undefined, so `cp`/`cpk` stay `None`, `zero_variance` is set, and
/// the interpretation reduces to where the mean sits: `Capable` when it is
/// strictly inside every limit, `NotCapable` otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityResult {
    pub cp: Option<f64>,
    pub cpk: Option<f64>,
    pub interpretation: CapabilityInterpretation,
    pub zero_variance: bool,
}

impl CapabilityResult {
    /// Assess process capability for a window.
    pub fn assess(statistics: &Statistics, limits: Option<&SpecificationLimits>) -> Self {
        let Some(limits) = limits else {
            return Self {
                cp: None,
                cpk: None,
                interpretation: CapabilityInterpretation::NoSpecificationLimits,
                zero_variance: false,
            };
        };

        if statistics.std_dev == 0.0 {
            let interpretation = if limits.strictly_within(statistics.mean) {
                CapabilityInterpretation::Capable
            } else {
                CapabilityInterpretation::NotCapable
            };
            return Self {
                cp: None,
                cpk: None,
                interpretation,
                zero_variance: true,
            };
        }

        let three_sigma = 3.0 * statistics.std_dev;
        let six_sigma = 6.0 * statistics.std_dev;
        let cp = match (limits.upper_limit(), limits.lower_limit()) {
            (Some(upper), Some(lower)) => Some((upper - lower) / six_sigma),
            _ => None,
        };
        let cpu = limits
            .upper_limit()
            .map(|upper| (upper - statistics.mean) / three_sigma);
        let cpl = limits
            .lower_limit()
            .map(|lower| (statistics.mean - lower) / three_sigma);

        // At least one side is present (SpecificationLimits invariant).
        let cpk = match (cpu, cpl) {
            (Some(u), Some(l)) => Some(u.min(l)),
            (Some(u), None) => Some(u),
            (None, Some(l)) => Some(l),
            (None, None) => None,
        };

        let interpretation = match cpk {
            Some(cpk) if cpk >= CAPABLE_MIN_CPK => CapabilityInterpretation::Capable,
            Some(cpk) if cpk >= MARGINAL_MIN_CPK => CapabilityInterpretation::MarginallyCapable,
            Some(_) => CapabilityInterpretation::NotCapable,
            None => CapabilityInterpretation::NoSpecificationLimits,
        };

        Self {
            cp,
            cpk,
            interpretation,
            zero_variance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mean: f64, std_dev: f64) -> Statistics {
        Statistics {
            mean,
            std_dev,
            variance: std_dev * std_dev,
            min: mean - 3.0 * std_dev,
            max: mean + 3.0 * std_dev,
            range: 6.0 * std_dev,
            count: 40,
        }
    }

    #[test]
    fn centered_process_with_wide_tolerance_is_capable() {
        // Textbook case: mean=10, sigma=1, USL=14, LSL=6 -> cpu = cpl = 4/3.
        let limits = SpecificationLimits::two_sided(14.0, 6.0).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 1.0), Some(&limits));

        assert!((result.cp.unwrap() - 8.0 / 6.0).abs() < 1e-12);
        assert!((result.cpk.unwrap() - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.interpretation, CapabilityInterpretation::Capable);
        assert!(!result.zero_variance);
    }

    #[test]
    fn off_center_process_uses_the_nearer_limit() {
        // Mean pushed toward the upper limit: cpu = 2/3, cpl = 2.
        let limits = SpecificationLimits::two_sided(12.0, 4.0).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 1.0), Some(&limits));

        assert!((result.cpk.unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.interpretation, CapabilityInterpretation::NotCapable);
    }

    #[test]
    fn marginal_band_is_between_one_and_one_point_three_three() {
        let limits = SpecificationLimits::two_sided(13.5, 6.5).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 1.0), Some(&limits));

        let cpk = result.cpk.unwrap();
        assert!(cpk >= MARGINAL_MIN_CPK && cpk < CAPABLE_MIN_CPK);
        assert_eq!(
            result.interpretation,
            CapabilityInterpretation::MarginallyCapable
        );
    }

    #[test]
    fn one_sided_specification_has_no_cp() {
        let upper_only = SpecificationLimits::new(Some(13.0), None).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 1.0), Some(&upper_only));

        assert_eq!(result.cp, None);
        assert!((result.cpk.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(
            result.interpretation,
            CapabilityInterpretation::MarginallyCapable
        );

        let lower_only = SpecificationLimits::new(None, Some(4.0)).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 1.0), Some(&lower_only));
        assert_eq!(result.cp, None);
        assert!((result.cpk.unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(result.interpretation, CapabilityInterpretation::Capable);
    }

    #[test]
    fn no_limits_yields_null_indices() {
        let result = CapabilityResult::assess(&stats(10.0, 1.0), None);
        assert_eq!(result.cp, None);
        assert_eq!(result.cpk, None);
        assert_eq!(
            result.interpretation,
            CapabilityInterpretation::NoSpecificationLimits
        );
        assert!(!result.zero_variance);
    }

    #[test]
    fn zero_variance_inside_limits_is_capable_without_indices() {
        let limits = SpecificationLimits::two_sided(11.0, 9.0).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 0.0), Some(&limits));

        assert_eq!(result.cp, None);
        assert_eq!(result.cpk, None);
        assert!(result.zero_variance);
        assert_eq!(result.interpretation, CapabilityInterpretation::Capable);
    }

    #[test]
    fn zero_variance_on_or_outside_a_limit_is_not_capable() {
        let limits = SpecificationLimits::two_sided(11.0, 9.0).unwrap();

        let on_limit = CapabilityResult::assess(&stats(11.0, 0.0), Some(&limits));
        assert_eq!(on_limit.interpretation, CapabilityInterpretation::NotCapable);
        assert!(on_limit.zero_variance);

        let outside = CapabilityResult::assess(&stats(12.0, 0.0), Some(&limits));
        assert_eq!(outside.interpretation, CapabilityInterpretation::NotCapable);
    }

    #[test]
    fn indices_serialize_as_null_never_nan() {
        let limits = SpecificationLimits::two_sided(11.0, 9.0).unwrap();
        let result = CapabilityResult::assess(&stats(10.0, 0.0), Some(&limits));

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["cp"], serde_json::Value::Null);
        assert_eq!(json["cpk"], serde_json::Value::Null);
        assert_eq!(json["zeroVariance"], serde_json::json!(true));
        assert_eq!(json["interpretation"], serde_json::json!("capable"));
    }
}
