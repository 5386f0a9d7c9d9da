// Shared HTTP transport for every resource manager.
//
// Owns the `reqwest::Client` (and its connection pool) plus the admin base
// URL. Managers borrow it; it never interprets status codes itself.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;

const USER_AGENT: &str = concat!("kong-api/", env!("CARGO_PKG_VERSION"));

/// Settings used to build the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Verify the admin API's TLS certificate.
    pub verify_tls: bool,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

/// A raw admin API response: status, body text, and where it came from.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
    pub method: Method,
    pub url: Url,
}

impl RawResponse {
    /// Pass the response through if it carries `expected`, otherwise turn it
    /// into `Error::UnexpectedStatus`.
    pub fn expect(self, expected: StatusCode) -> Result<Self, Error> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(Error::UnexpectedStatus {
                status: self.status.as_u16(),
                body: self.body,
                method: self.method,
                url: self.url.to_string(),
            })
        }
    }

    /// Decode the body as JSON.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| {
            let preview: String = self.body.chars().take(200).collect();
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body: self.body,
            }
        })
    }
}

/// HTTP transport bound to one admin API base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    /// Build a transport with its own `reqwest::Client`.
    pub fn new(base_url: &str, config: &TransportConfig) -> Result<Self, Error> {
        let http = config.build_client()?;
        Self::with_client(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages TLS and timeouts).
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The admin API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative admin path (e.g. `"/services?tags=a"`) against the base URL.
    ///
    /// The path is appended to the base path rather than replacing it, so an
    /// admin API mounted under a prefix (`https://host/kong-admin`) keeps it.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Issue a single request. Status codes are not checked here.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, Error> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let url = resp.url().clone();
        let body = resp.text().await?;
        debug!(%status, "{method} {url} completed");

        Ok(RawResponse {
            status,
            body,
            method,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn transport(base: &str) -> Transport {
        Transport::with_client(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn joins_paths_onto_root_base() {
        let t = transport("http://localhost:8001");
        assert_eq!(
            t.url("/services").unwrap().as_str(),
            "http://localhost:8001/services"
        );
        assert_eq!(t.url("/").unwrap().as_str(), "http://localhost:8001/");
    }

    #[test]
    fn keeps_base_path_prefix_and_query() {
        let t = transport("https://gw.example.com/admin/");
        assert_eq!(
            t.url("/routes?tags=edge").unwrap().as_str(),
            "https://gw.example.com/admin/routes?tags=edge"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = Transport::with_client("not a url", reqwest::Client::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn expect_maps_mismatch_to_unexpected_status() {
        let resp = RawResponse {
            status: StatusCode::CONFLICT,
            body: "dup".into(),
            method: Method::POST,
            url: Url::parse("http://localhost:8001/services").unwrap(),
        };
        match resp.expect(StatusCode::CREATED).unwrap_err() {
            Error::UnexpectedStatus {
                status,
                body,
                method,
                url,
            } => {
                assert_eq!(status, 409);
                assert_eq!(body, "dup");
                assert_eq!(method, Method::POST);
                assert_eq!(url, "http://localhost:8001/services");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
