//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use checkout_types::dto::{CreateOrderRequest, ErrorResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Generate a client-rendering token for the browser SDK
#[utoipa::path(
    post,
    path = "/api/token",
    tag = "checkout",
    responses(
        (status = 200, description = "Provider token response, relayed verbatim", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
async fn client_token() {}

/// Create an order for the fixed checkout amount
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "checkout",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Provider order response, relayed verbatim", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
async fn create_order() {}

/// Capture payment for an approved order
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/capture",
    tag = "checkout",
    params(
        ("order_id" = String, Path, description = "Provider-issued order ID")
    ),
    responses(
        (status = 201, description = "Provider capture response, relayed verbatim", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
async fn capture_order() {}

/// Authorize payment for an approved order
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/authorize",
    tag = "checkout",
    params(
        ("order_id" = String, Path, description = "Provider-issued order ID")
    ),
    responses(
        (status = 201, description = "Provider authorize response, relayed verbatim", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
async fn authorize_order() {}

/// Capture a previously created authorization
#[utoipa::path(
    post,
    path = "/orders/{authorization_id}/captureAuthorize",
    tag = "checkout",
    params(
        ("authorization_id" = String, Path, description = "Provider-issued authorization ID")
    ),
    responses(
        (status = 201, description = "Provider capture response, relayed verbatim", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
async fn capture_authorization() {}

/// OpenAPI documentation for the checkout gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkout Gateway API",
        version = "1.0.0",
        description = "A thin gateway that brokers browser checkout calls to the payment provider's REST API and relays the provider's status and body verbatim.",
        license(name = "MIT"),
    ),
    paths(
        health,
        client_token,
        create_order,
        capture_order,
        authorize_order,
        capture_authorization,
    ),
    components(
        schemas(
            CreateOrderRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkout", description = "Provider-proxied checkout operations"),
    )
)]
pub struct ApiDoc;
