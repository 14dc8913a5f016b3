//! Payment provider port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! The REST adapter (and test mocks) implement this trait.

use crate::domain::{OrderPayload, ProviderReply};
use crate::error::ProviderError;

/// The upstream payment provider port.
///
/// Every operation is a single synchronous round trip: acquire a fresh
/// access token, call the provider, normalize the response. Implementations
/// MUST NOT cache tokens or retry failed calls - each gateway request maps
/// to exactly one token grant plus one operation call.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync + 'static {
    /// Requests a client-rendering token for the browser SDK.
    async fn client_token(&self) -> Result<ProviderReply, ProviderError>;

    /// Creates a new order from the given payload.
    async fn create_order(&self, payload: OrderPayload) -> Result<ProviderReply, ProviderError>;

    /// Captures payment for an approved order.
    async fn capture_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError>;

    /// Authorizes payment for an approved order.
    async fn authorize_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError>;

    /// Captures a previously created authorization.
    async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> Result<ProviderReply, ProviderError>;
}
