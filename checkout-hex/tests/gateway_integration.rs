//! Integration tests for the gateway's HTTP surface.
//!
//! A wiremock server stands in for the upstream provider; requests go
//! through the full Axum router via tower's oneshot. These exercise the
//! pass-through property end to end: gateway status equals upstream status,
//! gateway body equals upstream JSON body.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use checkout_hex::{CheckoutService, inbound::HttpServer};
use checkout_provider::{Credentials, PayPalProvider};

fn credentials() -> Credentials {
    Credentials {
        client_id: "test-client".into(),
        client_secret: "test-secret".into(),
    }
}

/// Gateway wired to the given mock upstream.
fn gateway_for(upstream: &MockServer) -> Router {
    let provider = PayPalProvider::with_base_url(upstream.uri(), Some(credentials()));
    HttpServer::new(CheckoutService::new(provider)).router()
}

/// Gateway with no credentials configured; provider calls fail before any
/// network IO, so no upstream is needed.
fn gateway_without_credentials() -> Router {
    let provider = PayPalProvider::new(None);
    HttpServer::new(CheckoutService::new(provider)).router()
}

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A21AAFtest",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .mount(server)
        .await;
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_capture_passes_through_upstream_status_and_body() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/ABC123/capture"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "COMPLETED" })))
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);
    let response = app.oneshot(post("/api/orders/ABC123/capture")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({ "status": "COMPLETED" }));
}

#[tokio::test]
async fn test_token_endpoint_passes_through() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    Mock::given(method("POST"))
        .and(path("/v1/identity/generate-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_token": "eyJicmFpbnRyZWUi",
            "expires_in": 3600
        })))
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);
    let response = app.oneshot(post("/api/token")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["client_token"], "eyJicmFpbnRyZWUi");
    assert_eq!(body["expires_in"], 3600);
}

#[tokio::test]
async fn test_create_order_sends_fixed_charge_regardless_of_cart() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    // The matcher pins the exact upstream body: fixed USD 100.00, no trace
    // of the submitted cart.
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .and(body_json(json!({
            "intent": "CAPTURE",
            "purchase_units": [
                { "amount": { "currency_code": "USD", "value": "100.00" } }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "5O190127TN364715T",
            "status": "CREATED"
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);
    let cart = json!({ "cart": [{ "id": "SKU-42", "quantity": 7, "price": "9999.99" }] });
    let response = app.oneshot(post_json("/api/orders", cart)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["id"], "5O190127TN364715T");
}

#[tokio::test]
async fn test_authorize_and_capture_authorize_pass_through() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/ORD-9/authorize"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "COMPLETED" })))
        .expect(1)
        .mount(&upstream)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/payments/authorizations/AUTH-9/capture"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "COMPLETED" })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);

    let response = app
        .clone()
        .oneshot(post("/api/orders/ORD-9/authorize"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // This route lives outside /api, matching the original surface.
    let response = app
        .oneshot(post("/orders/AUTH-9/captureAuthorize"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_upstream_json_errors_are_relayed_with_their_status() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/BAD/capture"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "name": "UNPROCESSABLE_ENTITY",
            "details": [{ "issue": "ORDER_NOT_APPROVED" }]
        })))
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);
    let response = app.oneshot(post("/api/orders/BAD/capture")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["name"], "UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn test_missing_credentials_produce_fixed_error_payloads() {
    let cases = [
        (post("/api/token"), "Failed to generate client token."),
        (
            post_json("/api/orders", json!({ "cart": [] })),
            "Failed to create order.",
        ),
        (post("/api/orders/ABC123/capture"), "Failed to capture order."),
        (
            post("/api/orders/ABC123/authorize"),
            "Failed to authorize order.",
        ),
        (
            post("/orders/AUTH-1/captureAuthorize"),
            "Failed to capture authorization.",
        ),
    ];

    for (request, message) in cases {
        let response = gateway_without_credentials().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_non_json_upstream_body_produces_fixed_error() {
    let upstream = MockServer::start().await;
    mount_token_endpoint(&upstream).await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/ABC123/capture"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&upstream)
        .await;

    let app = gateway_for(&upstream);
    let response = app.oneshot(post("/api/orders/ABC123/capture")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Failed to capture order." })
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = gateway_without_credentials()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_static_index_served_regardless_of_query_params() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><title>Checkout</title>",
    )
    .unwrap();

    let provider = PayPalProvider::new(None);
    let app = HttpServer::new(CheckoutService::new(provider))
        .with_static_dir(dir.path())
        .router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?utm_source=email&session=42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Checkout"));
}
