//! Outbound order-creation payload.
//!
//! These structs serialize to the provider's order wire format. They are
//! never stored; an `OrderPayload` is built per request and dropped once
//! the upstream call returns.

use serde::{Deserialize, Serialize};

/// Processing intent for a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Capture the payment immediately on approval.
    Capture,
    /// Reserve funds; capture happens later against the authorization.
    Authorize,
}

/// Monetary amount as the provider expects it: ISO currency code plus a
/// decimal string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAmount {
    pub currency_code: String,
    pub value: String,
}

/// A single purchase unit within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: OrderAmount,
}

/// Body of an order-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub intent: OrderIntent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderPayload {
    /// Builds an order with exactly one purchase unit.
    pub fn single_purchase(intent: OrderIntent, currency_code: &str, value: &str) -> Self {
        Self {
            intent,
            purchase_units: vec![PurchaseUnit {
                amount: OrderAmount {
                    currency_code: currency_code.to_string(),
                    value: value.to_string(),
                },
            }],
        }
    }
}
