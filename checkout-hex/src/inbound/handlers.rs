//! HTTP request handlers.
//!
//! Each checkout handler is one linear sequence: call the service, relay the
//! provider's status and body verbatim, or collapse any failure into the
//! endpoint's fixed 500 payload.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use checkout_types::{CreateOrderRequest, PaymentProvider, ProviderError, ProviderReply};

use crate::CheckoutService;

/// Application state shared across handlers.
pub struct AppState<P: PaymentProvider> {
    pub service: CheckoutService<P>,
}

/// Fixed 500 payload - the only failure shape this gateway produces.
pub struct ApiError(&'static str);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0 });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Wrapper to implement IntoResponse for ProviderReply (orphan rule workaround).
pub struct ProviderRelay(pub ProviderReply);

impl IntoResponse for ProviderRelay {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body)).into_response()
    }
}

fn fail(message: &'static str) -> impl FnOnce(ProviderError) -> ApiError {
    move |err| {
        tracing::error!(error = %err, "{message}");
        ApiError(message)
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Generate a client-rendering token for the browser SDK.
#[tracing::instrument(skip(state))]
pub async fn client_token<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<ProviderRelay, ApiError> {
    state
        .service
        .client_token()
        .await
        .map(ProviderRelay)
        .map_err(fail("Failed to generate client token."))
}

/// Create an order for the fixed checkout amount.
#[tracing::instrument(skip(state, req))]
pub async fn create_order<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<ProviderRelay, ApiError> {
    state
        .service
        .create_order(req.cart)
        .await
        .map(ProviderRelay)
        .map_err(fail("Failed to create order."))
}

/// Capture payment for an approved order.
#[tracing::instrument(skip(state), fields(order_id = %order_id))]
pub async fn capture_order<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(order_id): Path<String>,
) -> Result<ProviderRelay, ApiError> {
    state
        .service
        .capture_order(&order_id)
        .await
        .map(ProviderRelay)
        .map_err(fail("Failed to capture order."))
}

/// Authorize payment for an approved order.
#[tracing::instrument(skip(state), fields(order_id = %order_id))]
pub async fn authorize_order<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(order_id): Path<String>,
) -> Result<ProviderRelay, ApiError> {
    state
        .service
        .authorize_order(&order_id)
        .await
        .map(ProviderRelay)
        .map_err(fail("Failed to authorize order."))
}

/// Capture a previously created authorization.
#[tracing::instrument(skip(state), fields(authorization_id = %authorization_id))]
pub async fn capture_authorization<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(authorization_id): Path<String>,
) -> Result<ProviderRelay, ApiError> {
    state
        .service
        .capture_authorization(&authorization_id)
        .await
        .map(ProviderRelay)
        .map_err(fail("Failed to capture authorization."))
}
