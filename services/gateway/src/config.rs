//! Configuration consumed by the HTTP boundary
//!
//! The engine itself is configuration-free; only the listen address comes
//! from the environment. Settlement credentials and endpoints belong to the
//! downstream collaborators, not this service.

use anyhow::{Context, Result};

/// HTTP server configuration, read from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `EXCHANGE_HOST` / `EXCHANGE_PORT`, defaulting to `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("EXCHANGE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("EXCHANGE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid EXCHANGE_PORT: {raw}"))?,
            Err(_) => 3000,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
