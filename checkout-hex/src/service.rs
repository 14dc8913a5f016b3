//! Checkout Application Service
//!
//! Orchestrates provider operations through the provider port.
//! Contains NO infrastructure logic - pure request orchestration.

use checkout_types::{OrderIntent, OrderPayload, PaymentProvider, ProviderError, ProviderReply};

// The charge is fixed server-side; the submitted cart is informational only.
pub const ORDER_CURRENCY: &str = "USD";
pub const ORDER_AMOUNT: &str = "100.00";

/// Application service for checkout operations.
///
/// Generic over `P: PaymentProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with a mock provider
/// - Compile-time checks for port implementation
pub struct CheckoutService<P: PaymentProvider> {
    provider: P,
}

impl<P: PaymentProvider> CheckoutService<P> {
    /// Creates a new checkout service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Requests a client-rendering token for the browser SDK.
    pub async fn client_token(&self) -> Result<ProviderReply, ProviderError> {
        self.provider.client_token().await
    }

    /// Creates an order with the fixed charge amount.
    ///
    /// The cart is logged for traceability; it does not influence the charge.
    pub async fn create_order(
        &self,
        cart: serde_json::Value,
    ) -> Result<ProviderReply, ProviderError> {
        tracing::debug!(%cart, "shopping cart information passed from the frontend");

        let payload =
            OrderPayload::single_purchase(OrderIntent::Capture, ORDER_CURRENCY, ORDER_AMOUNT);
        self.provider.create_order(payload).await
    }

    /// Captures payment for an approved order.
    pub async fn capture_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError> {
        self.provider.capture_order(order_id).await
    }

    /// Authorizes payment for an approved order.
    pub async fn authorize_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError> {
        self.provider.authorize_order(order_id).await
    }

    /// Captures a previously created authorization.
    pub async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> Result<ProviderReply, ProviderError> {
        self.provider.capture_authorization(authorization_id).await
    }
}
