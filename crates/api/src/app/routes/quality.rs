use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;

use shopfloor_core::{ParameterName, ProductId};
use shopfloor_spc::{MIN_SAMPLES, MeasurementSample, SpecificationLimits};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::TenantContext;

/// Window size used when the request does not specify one.
const DEFAULT_WINDOW: usize = 100;

/// Upper bound on the analysis window, keeping worst-case latency bounded.
const MAX_WINDOW: usize = 1000;

pub fn router() -> Router {
    Router::new()
        .route("/measurements", post(record_measurement))
        .route("/spec-limits", put(set_specification_limits))
        .route("/spc/:product_id/:parameter", get(analyze_parameter))
}

pub async fn record_measurement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Json(body): Json<dto::RecordMeasurementRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };
    let parameter = match ParameterName::new(body.parameter) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if !body.value.is_finite() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "measurement value must be a finite number",
        );
    }

    let sample = MeasurementSample::new(body.value, body.measured_at.unwrap_or_else(Utc::now));

    if let Err(e) =
        services
            .measurements()
            .record(tenant.tenant_id(), product_id, &parameter, sample)
    {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "data": {
                "productId": product_id.to_string(),
                "parameter": parameter.as_str(),
                "measuredAt": sample.measured_at,
            },
        })),
    )
        .into_response()
}

pub async fn set_specification_limits(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Json(body): Json<dto::SetSpecificationLimitsRequest>,
) -> axum::response::Response {
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };
    let parameter = match ParameterName::new(body.parameter) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let limits = match SpecificationLimits::new(body.upper_limit, body.lower_limit) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services
        .specifications()
        .put(tenant.tenant_id(), product_id, &parameter, limits)
    {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "data": {
                "productId": product_id.to_string(),
                "parameter": parameter.as_str(),
                "limits": limits,
            },
        })),
    )
        .into_response()
}

pub async fn analyze_parameter(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Path((product_id, parameter)): Path<(String, String)>,
    Query(query): Query<dto::AnalysisQuery>,
) -> axum::response::Response {
    let product_id: ProductId = match product_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };
    let parameter = match ParameterName::new(parameter) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let window = query.samples.unwrap_or(DEFAULT_WINDOW);
    if !(MIN_SAMPLES..=MAX_WINDOW).contains(&window) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("samples must be between {MIN_SAMPLES} and {MAX_WINDOW}"),
        );
    }

    let samples = match services.measurements().recent_window(
        tenant.tenant_id(),
        product_id,
        &parameter,
        window,
    ) {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let spec_limits = match services
        .specifications()
        .get(tenant.tenant_id(), product_id, &parameter)
    {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    match shopfloor_spc::analyze(&samples, spec_limits.as_ref()) {
        Ok(report) => {
            tracing::debug!(
                product_id = %product_id,
                parameter = %parameter,
                samples = report.statistics.count,
                in_control = report.analysis.in_control,
                "spc analysis completed"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "data": report,
                })),
            )
                .into_response()
        }
        Err(e) => errors::spc_error_to_response(&e),
    }
}
