//! Trend, run, and alternating-pattern detection over a measurement window.
//!
//! Detection runs over the value sequence in chronological order (oldest
//! first); the report assembler sorts before calling in here. Thresholds
//! are fixed counts independent of window size.

use serde::{Deserialize, Serialize};

/// Minimum window for trend detection.
pub const TREND_MIN_SAMPLES: usize = 7;

/// Consecutive-step count that declares a trend.
pub const TREND_STEP_THRESHOLD: usize = 6;

/// Minimum window for run/alternating detection.
pub const PATTERN_MIN_SAMPLES: usize = 14;

/// Same-side-of-mean run length that flags a sustained shift.
pub const RUN_LENGTH_THRESHOLD: usize = 8;

/// Direction-reversal count that flags an alternating pattern.
pub const REVERSAL_COUNT_THRESHOLD: usize = 12;

/// Direction of the series over the window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

/// Non-random structure in the series.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Run,
    Alternating,
    Random,
    InsufficientData,
}

/// Detect a trend from consecutive-step directions.
///
/// Counts increasing and decreasing steps across all `n - 1` consecutive
/// pairs; a zero step counts as neither. Windows under
/// [`TREND_MIN_SAMPLES`] cannot be judged.
pub fn detect_trend(values: &[f64]) -> Trend {
    if values.len() < TREND_MIN_SAMPLES {
        return Trend::InsufficientData;
    }

    let mut increasing = 0usize;
    let mut decreasing = 0usize;
    for pair in values.windows(2) {
        if pair[1] > pair[0] {
            increasing += 1;
        } else if pair[1] < pair[0] {
            decreasing += 1;
        }
    }

    if increasing >= TREND_STEP_THRESHOLD {
        Trend::Increasing
    } else if decreasing >= TREND_STEP_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Detect non-random structure: a long same-side run first, then an
/// alternating zig-zag, else random. Windows under
/// [`PATTERN_MIN_SAMPLES`] cannot be judged.
pub fn detect_pattern(values: &[f64], mean: f64) -> Pattern {
    if values.len() < PATTERN_MIN_SAMPLES {
        return Pattern::InsufficientData;
    }

    if longest_same_side_run(values, mean) >= RUN_LENGTH_THRESHOLD {
        return Pattern::Run;
    }

    if direction_reversals(values) >= REVERSAL_COUNT_THRESHOLD {
        return Pattern::Alternating;
    }

    Pattern::Random
}

/// Longest run of consecutive points on the same side of the mean.
///
/// A point exactly on the mean counts as the below side (strict `> mean`
/// test for above).
fn longest_same_side_run(values: &[f64], mean: f64) -> usize {
    let mut longest = 0usize;
    let mut current = 0usize;
    let mut side: Option<bool> = None;

    for &value in values {
        let above = value > mean;
        if side == Some(above) {
            current += 1;
        } else {
            side = Some(above);
            current = 1;
        }
        longest = longest.max(current);
    }

    longest
}

/// Count local maxima/minima: triples whose two steps strictly change
/// direction. A zero step breaks a reversal.
fn direction_reversals(values: &[f64]) -> usize {
    values
        .windows(3)
        .filter(|w| {
            let first = w[1] - w[0];
            let second = w[2] - w[1];
            first * second < 0.0
        })
        .count()
}
