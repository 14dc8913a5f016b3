//! PayPal REST adapter.
//!
//! Implements the `PaymentProvider` port against the PayPal checkout API.
//! Every operation performs two sequential round trips: a fresh
//! client-credentials token grant, then the target call with a Bearer
//! header. Tokens are never cached or reused across requests.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header;
use serde::Deserialize;

use checkout_types::{OrderPayload, PaymentProvider, ProviderError, ProviderReply};

/// Fixed sandbox endpoint the gateway talks to.
pub const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Client-credentials pair issued by the provider dashboard.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Subset of the OAuth token grant response we read.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
}

/// PayPal REST client.
pub struct PayPalProvider {
    base_url: String,
    credentials: Option<Credentials>,
    http: reqwest::Client,
}

impl PayPalProvider {
    /// Creates an adapter pointed at the sandbox endpoint.
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self::with_base_url(SANDBOX_BASE_URL, credentials)
    }

    /// Creates an adapter with a custom base URL (tests point this at a
    /// local mock server).
    pub fn with_base_url(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            http: reqwest::Client::new(),
        }
    }

    /// Obtains a fresh access token via the client-credentials grant.
    ///
    /// Called once per operation; there is no cache, matching the observed
    /// per-request token behavior of this gateway.
    async fn access_token(&self) -> Result<String, ProviderError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)?;

        tracing::debug!("requesting fresh access token");

        let basic = BASE64.encode(format!(
            "{}:{}",
            credentials.client_id, credentials.client_secret
        ));

        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .header(header::AUTHORIZATION, format!("Basic {basic}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        let grant: TokenGrant = serde_json::from_str(&text)
            .map_err(|_| ProviderError::MalformedToken(format!("status {status}: {text}")))?;

        Ok(grant.access_token)
    }

    /// Builds a Bearer-authenticated POST for the given API path,
    /// acquiring a fresh token first.
    async fn bearer_post(&self, path: &str) -> Result<reqwest::RequestBuilder, ProviderError> {
        let token = self.access_token().await?;
        Ok(self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json"))
    }
}

/// Normalizes an upstream response into status code plus JSON body.
///
/// Non-JSON bodies surface as `UnexpectedBody` carrying the raw text; the
/// caller logs it and answers with its fixed 500 payload.
async fn normalize(response: reqwest::Response) -> Result<ProviderReply, ProviderError> {
    let status = response.status().as_u16();
    let text = response.text().await.map_err(transport)?;

    match serde_json::from_str(&text) {
        Ok(body) => Ok(ProviderReply::new(status, body)),
        Err(_) => Err(ProviderError::UnexpectedBody { status, body: text }),
    }
}

fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

#[async_trait::async_trait]
impl PaymentProvider for PayPalProvider {
    async fn client_token(&self) -> Result<ProviderReply, ProviderError> {
        let response = self
            .bearer_post("/v1/identity/generate-token")
            .await?
            .header(header::ACCEPT_LANGUAGE, "en_US")
            .send()
            .await
            .map_err(transport)?;
        normalize(response).await
    }

    async fn create_order(&self, payload: OrderPayload) -> Result<ProviderReply, ProviderError> {
        let response = self
            .bearer_post("/v2/checkout/orders")
            .await?
            .json(&payload)
            .send()
            .await
            .map_err(transport)?;
        normalize(response).await
    }

    async fn capture_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError> {
        let response = self
            .bearer_post(&format!("/v2/checkout/orders/{order_id}/capture"))
            .await?
            .send()
            .await
            .map_err(transport)?;
        normalize(response).await
    }

    async fn authorize_order(&self, order_id: &str) -> Result<ProviderReply, ProviderError> {
        let response = self
            .bearer_post(&format!("/v2/checkout/orders/{order_id}/authorize"))
            .await?
            .send()
            .await
            .map_err(transport)?;
        normalize(response).await
    }

    async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> Result<ProviderReply, ProviderError> {
        let response = self
            .bearer_post(&format!(
                "/v2/payments/authorizations/{authorization_id}/capture"
            ))
            .await?
            .send()
            .await
            .map_err(transport)?;
        normalize(response).await
    }
}
