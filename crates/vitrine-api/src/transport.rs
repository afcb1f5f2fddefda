// Shared transport configuration for building reqwest::Client instances.
//
// The GraphQL client reuses one pooled HTTP client for every content
// type; timeout and user-agent settings live here so tests and the
// server binary build clients the same way.

use std::time::Duration;

const USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));

/// Transport settings applied to every outbound CMS request.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(crate::error::Error::Network)
    }
}
