//! Normalized upstream response.

use serde::{Deserialize, Serialize};

/// A provider response after normalization: the upstream HTTP status code
/// and the JSON body, relayed to the caller unchanged.
///
/// The gateway never inspects the body beyond parsing it as JSON; order and
/// authorization lifecycles are entirely provider-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReply {
    /// Upstream HTTP status code.
    pub status: u16,
    /// Upstream JSON body, verbatim.
    pub body: serde_json::Value,
}

impl ProviderReply {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
