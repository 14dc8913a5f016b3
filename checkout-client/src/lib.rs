//! # Checkout Client SDK
//!
//! A typed Rust client for the checkout gateway API.
//!
//! Response bodies are provider JSON relayed verbatim by the gateway, so
//! every call returns a raw `serde_json::Value` rather than a typed struct.

use serde_json::Value;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Checkout gateway API client.
pub struct CheckoutClient {
    base_url: String,
    http: reqwest::Client,
}

impl CheckoutClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Checks if the gateway is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Requests a client-rendering token for the browser SDK.
    pub async fn client_token(&self) -> Result<Value, ClientError> {
        self.post("/api/token", None).await
    }

    /// Creates an order. The cart is informational; the gateway charges a
    /// fixed amount.
    pub async fn create_order(&self, cart: Value) -> Result<Value, ClientError> {
        self.post("/api/orders", Some(serde_json::json!({ "cart": cart })))
            .await
    }

    /// Captures payment for an approved order.
    pub async fn capture_order(&self, order_id: &str) -> Result<Value, ClientError> {
        self.post(&format!("/api/orders/{order_id}/capture"), None)
            .await
    }

    /// Authorizes payment for an approved order.
    pub async fn authorize_order(&self, order_id: &str) -> Result<Value, ClientError> {
        self.post(&format!("/api/orders/{order_id}/authorize"), None)
            .await
    }

    /// Captures a previously created authorization.
    pub async fn capture_authorization(
        &self,
        authorization_id: &str,
    ) -> Result<Value, ClientError> {
        self.post(&format!("/orders/{authorization_id}/captureAuthorize"), None)
            .await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, ClientError> {
        let mut req = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
