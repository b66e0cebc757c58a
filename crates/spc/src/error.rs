//! Analysis error model.

use thiserror::Error;

/// Error produced by the SPC analysis engine.
///
/// Degenerate numeric situations (zero variance, one-sided specification
/// limits) are explicit output states on the report, never errors; the only
/// hard failure is a window too small to estimate sample statistics from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpcError {
    /// The measurement window holds fewer samples than the statistics
    /// require. Surfaced to callers verbatim; never silently defaulted.
    #[error("insufficient data: {required} samples required, {available} available")]
    InsufficientData { required: usize, available: usize },
}
