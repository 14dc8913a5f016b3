//! Configuration loading from environment.

use std::env;

use checkout_provider::Credentials;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Provider credentials; `None` when either variable is unset. The
    /// server still starts, and every provider-backed endpoint answers
    /// with its fixed 500 payload.
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let credentials = match (env::var("PAYPAL_CLIENT_ID"), env::var("PAYPAL_CLIENT_SECRET")) {
            (Ok(client_id), Ok(client_secret)) => Some(Credentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Ok(Self { port, credentials })
    }
}
