//! Error types for the checkout gateway.

/// Provider-level errors (outbound call failures).
///
/// Transport failures are stringly wrapped so this crate stays free of IO
/// dependencies. Every variant collapses to the same generic 500 at the
/// HTTP boundary; the distinction exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("payment provider credentials are not configured")]
    MissingCredentials,

    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("token endpoint returned no usable access token: {0}")]
    MalformedToken(String),

    #[error("provider returned a non-JSON body (status {status}): {body}")]
    UnexpectedBody { status: u16, body: String },
}
