use chrono::{Duration, TimeZone, Utc};
use reqwest::StatusCode;
use serde_json::json;

use shopfloor_core::{ProductId, TenantId};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = shopfloor_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn steady_window_values() -> Vec<f64> {
    vec![
        9.8, 10.1, 9.9, 10.2, 9.7, 10.3, 9.95, 10.05, 10.0, 9.85, 10.15, 9.9, 10.1, 9.95, 10.05,
        10.0, 10.2, 9.8, 10.1, 9.9,
    ]
}

async fn record_series(
    client: &reqwest::Client,
    base_url: &str,
    tenant_id: TenantId,
    product_id: ProductId,
    parameter: &str,
    values: &[f64],
) {
    let base = Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();
    for (i, value) in values.iter().enumerate() {
        let res = client
            .post(format!("{}/quality/measurements", base_url))
            .header("x-tenant-id", tenant_id.to_string())
            .json(&json!({
                "productId": product_id.to_string(),
                "parameter": parameter,
                "value": value,
                "measuredAt": base + Duration::minutes(i as i64),
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn tenant_header_is_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .header("x-tenant-id", "not-a-uuid")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let tenant_id = TenantId::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .header("x-tenant-id", tenant_id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["tenant_id"].as_str().unwrap(), tenant_id.to_string());
}

#[tokio::test]
async fn spc_analysis_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let product_id = ProductId::new();
    let parameter = "wall_thickness_mm";

    record_series(
        &client,
        &srv.base_url,
        tenant_id,
        product_id,
        parameter,
        &steady_window_values(),
    )
    .await;

    let res = client
        .put(format!("{}/quality/spec-limits", srv.base_url))
        .header("x-tenant-id", tenant_id.to_string())
        .json(&json!({
            "productId": product_id.to_string(),
            "parameter": parameter,
            "upperLimit": 11.0,
            "lowerLimit": 9.0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!(
            "{}/quality/spc/{}/{}?samples=50",
            srv.base_url, product_id, parameter
        ))
        .header("x-tenant-id", tenant_id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));

    let report = &body["data"];
    assert_eq!(report["statistics"]["count"], json!(20));
    assert_eq!(report["processCapability"]["interpretation"], json!("capable"));
    assert_eq!(report["analysis"]["inControl"], json!(true));
    assert_eq!(report["analysis"]["outOfControlPoints"], json!(0));
    assert_eq!(report["data"].as_array().unwrap().len(), 20);
    assert_eq!(report["data"][0]["status"], json!("normal"));
}

#[tokio::test]
async fn insufficient_data_is_surfaced_verbatim() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let product_id = ProductId::new();
    let parameter = "bore_diameter_mm";

    record_series(
        &client,
        &srv.base_url,
        tenant_id,
        product_id,
        parameter,
        &steady_window_values()[..19],
    )
    .await;

    let res = client
        .get(format!(
            "{}/quality/spc/{}/{}",
            srv.base_url, product_id, parameter
        ))
        .header("x-tenant-id", tenant_id.to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!("insufficient_data"));
    assert_eq!(body["required"], json!(20));
    assert_eq!(body["available"], json!(19));
}

#[tokio::test]
async fn window_bounds_are_validated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let product_id = ProductId::new();

    for samples in ["19", "1001"] {
        let res = client
            .get(format!(
                "{}/quality/spc/{}/weight_g?samples={}",
                srv.base_url, product_id, samples
            ))
            .header("x-tenant-id", tenant_id.to_string())
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], json!("validation_error"));
    }
}

#[tokio::test]
async fn malformed_specification_limits_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tenant_id = TenantId::new();
    let product_id = ProductId::new();

    // Inverted band.
    let res = client
        .put(format!("{}/quality/spec-limits", srv.base_url))
        .header("x-tenant-id", tenant_id.to_string())
        .json(&json!({
            "productId": product_id.to_string(),
            "parameter": "weight_g",
            "upperLimit": 9.0,
            "lowerLimit": 11.0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // No limits at all.
    let res = client
        .put(format!("{}/quality/spec-limits", srv.base_url))
        .header("x-tenant-id", tenant_id.to_string())
        .json(&json!({
            "productId": product_id.to_string(),
            "parameter": "weight_g",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn measurements_are_tenant_isolated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let tenant1 = TenantId::new();
    let tenant2 = TenantId::new();
    let product_id = ProductId::new();
    let parameter = "wall_thickness_mm";

    record_series(
        &client,
        &srv.base_url,
        tenant1,
        product_id,
        parameter,
        &steady_window_values(),
    )
    .await;

    // Tenant2 sees an empty series for the same product/parameter.
    let res = client
        .get(format!(
            "{}/quality/spc/{}/{}",
            srv.base_url, product_id, parameter
        ))
        .header("x-tenant-id", tenant2.to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!("insufficient_data"));
    assert_eq!(body["available"], json!(0));
}

#[tokio::test]
async fn invalid_product_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/quality/spc/not-a-uuid/weight_g",
            srv.base_url
        ))
        .header("x-tenant-id", TenantId::new().to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!("invalid_id"));
}
