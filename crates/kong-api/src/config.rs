// Client configuration

use std::time::Duration;

use url::Url;

use crate::transport::TransportConfig;

/// Everything needed to reach one admin API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Admin API base URL, e.g. `https://localhost:8444`.
    pub admin_url: Url,
    /// Verify the admin API's TLS certificate. Turn off for self-signed setups.
    pub verify_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(admin_url: Url) -> Self {
        let defaults = TransportConfig::default();
        Self {
            admin_url,
            verify_tls: defaults.verify_tls,
            timeout: defaults.timeout,
        }
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            verify_tls: self.verify_tls,
            timeout: self.timeout,
        }
    }
}
