//! # Checkout Provider
//!
//! Concrete provider implementation (adapter) for the checkout gateway.
//! This crate provides the PayPal REST adapter that implements the
//! `PaymentProvider` port.

mod paypal;

pub use paypal::{Credentials, PayPalProvider, SANDBOX_BASE_URL};

/// Build a provider pointed at the fixed sandbox endpoint.
///
/// Credentials may be absent; every operation then fails with
/// `ProviderError::MissingCredentials` and the gateway answers 500.
///
/// # Examples
///
/// ```ignore
/// let provider = build_provider(Some(Credentials {
///     client_id: "...".into(),
///     client_secret: "...".into(),
/// }));
/// ```
pub fn build_provider(credentials: Option<Credentials>) -> PayPalProvider {
    PayPalProvider::new(credentials)
}
