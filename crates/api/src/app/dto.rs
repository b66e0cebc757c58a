use chrono::{DateTime, Utc};
use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeasurementRequest {
    pub product_id: String,
    pub parameter: String,
    pub value: f64,
    /// Defaults to the server clock when omitted.
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSpecificationLimitsRequest {
    pub product_id: String,
    pub parameter: String,
    pub upper_limit: Option<f64>,
    pub lower_limit: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    pub samples: Option<usize>,
}
