//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new order.
///
/// The cart is whatever the browser sends. It is logged for traceability
/// and otherwise ignored: the charge amount is fixed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Opaque shopping cart contents from the frontend
    #[schema(value_type = Object, example = json!([{"id": "YOUR_PRODUCT_ID", "quantity": 1}]))]
    pub cart: serde_json::Value,
}

/// Fixed error payload returned on any provider failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure message for the endpoint
    #[schema(example = "Failed to create order.")]
    pub error: String,
}
