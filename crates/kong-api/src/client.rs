// Kong admin API client
//
// The composition root. `KongClient` owns the transport; every resource
// manager it hands out borrows it, so no manager can outlive the client.

use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::manager::Manager;
use crate::resources::{
    CertificateManager, ConsumerManager, NodeInfoManager, PluginManager, RouteManager,
    ServiceManager, SniManager, TagManager, TargetManager, UpstreamManager,
};
use crate::transport::{Transport, TransportConfig};

/// Async client for one Kong admin API.
///
/// ```no_run
/// # async fn demo() -> Result<(), kong_api::Error> {
/// let kong = kong_api::KongClient::new("https://localhost:8444", false)?;
/// for service in kong.services().list(Some("edge")).await? {
///     println!("{}", service.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KongClient {
    transport: Transport,
}

impl KongClient {
    /// Connect to `admin_url`, optionally skipping TLS verification.
    pub fn new(admin_url: &str, verify_tls: bool) -> Result<Self, Error> {
        let config = TransportConfig {
            verify_tls,
            ..TransportConfig::default()
        };
        Ok(Self {
            transport: Transport::new(admin_url, &config)?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(config.admin_url.as_str(), &config.transport_config())?,
        })
    }

    /// Use a caller-built `reqwest::Client` (TLS and timeouts are the caller's).
    pub fn from_reqwest(admin_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::with_client(admin_url, http)?,
        })
    }

    pub fn admin_url(&self) -> &Url {
        self.transport.base_url()
    }

    fn api(&self) -> Manager<'_> {
        Manager::new(&self.transport)
    }

    pub fn services(&self) -> ServiceManager<'_> {
        ServiceManager::new(self.api())
    }

    pub fn routes(&self) -> RouteManager<'_> {
        RouteManager::new(self.api())
    }

    pub fn consumers(&self) -> ConsumerManager<'_> {
        ConsumerManager::new(self.api())
    }

    pub fn plugins(&self) -> PluginManager<'_> {
        PluginManager::new(self.api())
    }

    pub fn certificates(&self) -> CertificateManager<'_> {
        CertificateManager::new(self.api())
    }

    pub fn snis(&self) -> SniManager<'_> {
        SniManager::new(self.api())
    }

    pub fn upstreams(&self) -> UpstreamManager<'_> {
        UpstreamManager::new(self.api())
    }

    pub fn targets(&self) -> TargetManager<'_> {
        TargetManager::new(self.api())
    }

    pub fn tags(&self) -> TagManager<'_> {
        TagManager::new(self.api())
    }

    /// Node information (`/` and `/status`).
    pub fn info(&self) -> NodeInfoManager<'_> {
        NodeInfoManager::new(self.api())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use super::*;

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KongClient>();
    }

    #[test]
    fn from_config_keeps_admin_url() {
        let mut config = ClientConfig::new(Url::parse("https://gw.example.com:8444/").unwrap());
        config.timeout = Duration::from_secs(5);
        let client = KongClient::from_config(&config).unwrap();
        assert_eq!(client.admin_url().as_str(), "https://gw.example.com:8444/");
    }

    #[test]
    fn new_rejects_garbage_url() {
        assert!(matches!(
            KongClient::new("::not-a-url::", true),
            Err(Error::InvalidUrl(_))
        ));
    }
}
