//! Client example demonstrating the full checkout flow against a running
//! gateway. A local mock stands in for the payment provider so the example
//! works without sandbox credentials.
//!
//! Run with: cargo run -p checkout-app --example client_example

use std::net::SocketAddr;

use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use checkout_client::CheckoutClient;
use checkout_hex::{CheckoutService, inbound::HttpServer};
use checkout_provider::{Credentials, PayPalProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Stand up a mock provider
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A21AAFexample",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .mount(&upstream)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/identity/generate-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_token": "eyJicmFpbnRyZWUi",
            "expires_in": 3600
        })))
        .mount(&upstream)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "5O190127TN364715T",
            "status": "CREATED"
        })))
        .mount(&upstream)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders/5O190127TN364715T/capture"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "5O190127TN364715T",
            "status": "COMPLETED"
        })))
        .mount(&upstream)
        .await;

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting gateway on port {port}...");
    println!("   Provider mock: {}", upstream.uri());

    // Start gateway in background
    let provider = PayPalProvider::with_base_url(
        upstream.uri(),
        Some(Credentials {
            client_id: "example-client".into(),
            client_secret: "example-secret".into(),
        }),
    );
    let service = CheckoutService::new(provider);
    let router = HttpServer::new(service).router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = CheckoutClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full checkout flow
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Gateway health: {health}");

    // Client-rendering token for the browser SDK
    let token = client.client_token().await?;
    println!("✅ Client token: {}", token["client_token"]);

    // Create an order (cart contents are informational only)
    let order = client
        .create_order(json!([{ "id": "YOUR_PRODUCT_ID", "quantity": 1 }]))
        .await?;
    let order_id = order["id"].as_str().unwrap().to_string();
    println!("✅ Created order: {order_id}");

    // Capture it
    let capture = client.capture_order(&order_id).await?;
    println!("✅ Capture status: {}", capture["status"]);

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
