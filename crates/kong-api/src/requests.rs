// Creation payloads
//
// One struct per creatable resource, pre-filled with the admin API defaults
// by `new`. `to_body` is the pure shaping stage: it applies tag defaulting,
// the service url/four-part exclusivity, and `{ "id": ... }` wrapping of
// relation ids. Unset optional fields are sent as `null`, which the admin
// API reads as "use the server default".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::Error;
use crate::fields::{default_tags, reference_to};

pub const DEFAULT_PROTOCOLS: [&str; 2] = ["http", "https"];
pub const DEFAULT_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "HEAD"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// ── Service ──────────────────────────────────────────────────────────

/// `POST /services` (also `POST /certificates/{id}/services`).
///
/// Either `url` or the four-part `protocol`/`host`/`port`/`path` form is
/// sent, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub url: Option<String>,
    pub protocol: String,
    pub host: Option<String>,
    pub port: u16,
    pub path: Option<String>,
    pub retries: u32,
    pub connect_timeout: u64,
    pub write_timeout: u64,
    pub read_timeout: u64,
    /// Certificate id presented to the upstream for mTLS.
    pub client_certificate: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            protocol: "http".into(),
            host: None,
            port: 80,
            path: None,
            retries: 5,
            connect_timeout: 60_000,
            write_timeout: 60_000,
            read_timeout: 60_000,
            client_certificate: None,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "retries": self.retries,
            "connect_timeout": self.connect_timeout,
            "write_timeout": self.write_timeout,
            "read_timeout": self.read_timeout,
            "tags": default_tags(self.tags.as_deref(), &self.name),
        });
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => {
                body["url"] = json!(url);
            }
            _ => {
                body["protocol"] = json!(self.protocol);
                body["host"] = json!(self.host);
                body["port"] = json!(self.port);
                body["path"] = json!(self.path);
            }
        }
        if let Some(cert) = self.client_certificate.as_deref().filter(|c| !c.is_empty()) {
            body["client_certificate"] = reference_to(cert);
        }
        body
    }
}

// ── Route ────────────────────────────────────────────────────────────

/// An `ip`/`port` pair for stream routing `sources` / `destinations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// `POST /routes` (also `POST /services/{id}/routes`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub name: String,
    /// Owning service id; sent as `service: { id }` when set.
    pub service_id: Option<String>,
    pub hosts: Option<Vec<String>>,
    pub protocols: Vec<String>,
    pub methods: Vec<String>,
    pub paths: Option<Vec<String>>,
    pub headers: Option<BTreeMap<String, Vec<String>>>,
    pub https_redirect_status_code: u16,
    pub regex_priority: i64,
    pub strip_path: bool,
    pub preserve_host: bool,
    pub snis: Option<Vec<String>>,
    pub sources: Option<Vec<StreamEndpoint>>,
    pub destinations: Option<Vec<StreamEndpoint>>,
    pub tags: Option<Vec<String>>,
}

impl NewRoute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_id: None,
            hosts: None,
            protocols: owned(&DEFAULT_PROTOCOLS),
            methods: owned(&DEFAULT_METHODS),
            paths: None,
            headers: None,
            https_redirect_status_code: 426,
            regex_priority: 0,
            strip_path: false,
            preserve_host: true,
            snis: None,
            sources: None,
            destinations: None,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "hosts": self.hosts,
            "protocols": self.protocols,
            "methods": self.methods,
            "paths": self.paths,
            "headers": self.headers,
            "https_redirect_status_code": self.https_redirect_status_code,
            "regex_priority": self.regex_priority,
            "strip_path": self.strip_path,
            "preserve_host": self.preserve_host,
            "snis": self.snis,
            "sources": self.sources,
            "destinations": self.destinations,
            "tags": default_tags(self.tags.as_deref(), &self.name),
        });
        if let Some(service) = self.service_id.as_deref().filter(|s| !s.is_empty()) {
            body["service"] = reference_to(service);
        }
        body
    }
}

// ── Consumer ─────────────────────────────────────────────────────────

/// `POST /consumers`. At least one of `username` / `custom_id` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewConsumer {
    pub username: Option<String>,
    pub custom_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewConsumer {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_custom_id(custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: Some(custom_id.into()),
            ..Self::default()
        }
    }

    pub fn to_body(&self) -> Result<Value, Error> {
        let key = self
            .username
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.custom_id.as_deref().filter(|c| !c.is_empty()))
            .ok_or_else(|| {
                Error::InvalidPayload("consumer needs a username or a custom_id".into())
            })?;
        Ok(json!({
            "username": self.username,
            "custom_id": self.custom_id,
            "tags": default_tags(self.tags.as_deref(), key),
        }))
    }
}

// ── Plugin ───────────────────────────────────────────────────────────

/// `POST /plugins` (also nested under routes, services and consumers).
///
/// Scoping ids are optional and may be combined freely; a plugin with none
/// of them applies globally.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlugin {
    pub name: String,
    pub route_id: Option<String>,
    pub service_id: Option<String>,
    pub consumer_id: Option<String>,
    pub config: Option<Map<String, Value>>,
    pub run_on: String,
    pub protocols: Vec<String>,
    pub enabled: bool,
    pub tags: Option<Vec<String>>,
}

impl NewPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route_id: None,
            service_id: None,
            consumer_id: None,
            config: None,
            run_on: "first".into(),
            protocols: owned(&DEFAULT_PROTOCOLS),
            enabled: true,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "run_on": self.run_on,
            "protocols": self.protocols,
            "enabled": self.enabled,
            "tags": default_tags(self.tags.as_deref(), &self.name),
        });
        let scopes = [
            ("route", &self.route_id),
            ("service", &self.service_id),
            ("consumer", &self.consumer_id),
        ];
        for (field, id) in scopes {
            if let Some(id) = id.as_deref().filter(|id| !id.is_empty()) {
                body[field] = reference_to(id);
            }
        }
        if let Some(config) = self.config.as_ref().filter(|c| !c.is_empty()) {
            body["config"] = Value::Object(config.clone());
        }
        body
    }
}

// ── Certificate / SNI ────────────────────────────────────────────────

/// `POST /certificates`. Certificates have no name, so tags are only sent
/// when given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCertificate {
    pub cert: String,
    pub key: String,
    pub snis: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl NewCertificate {
    pub fn new(cert: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            cert: cert.into(),
            key: key.into(),
            snis: None,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        json!({
            "cert": self.cert,
            "key": self.key,
            "snis": self.snis,
            "tags": self.tags,
        })
    }
}

/// `POST /snis` (also `POST /certificates/{id}/snis`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSni {
    pub name: String,
    /// Required for `POST /snis`; implied by the URL when nested under a certificate.
    pub certificate_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewSni {
    pub fn new(name: impl Into<String>, certificate_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            certificate_id: Some(certificate_id.into()),
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "tags": default_tags(self.tags.as_deref(), &self.name),
        });
        if let Some(cert) = self.certificate_id.as_deref().filter(|c| !c.is_empty()) {
            body["certificate"] = reference_to(cert);
        }
        body
    }
}

// ── Upstream / Target ────────────────────────────────────────────────

/// `POST /upstreams`. `name` must match a service `host` for traffic to
/// be balanced through it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUpstream {
    pub name: String,
    pub algorithm: String,
    pub hash_on: String,
    pub hash_fallback: String,
    pub hash_on_header: Option<String>,
    pub hash_fallback_header: Option<String>,
    pub hash_on_cookie: Option<String>,
    pub hash_on_cookie_path: String,
    pub slots: u32,
    pub healthchecks: Option<Value>,
    pub host_header: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewUpstream {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            algorithm: "round-robin".into(),
            hash_on: "none".into(),
            hash_fallback: "none".into(),
            hash_on_header: None,
            hash_fallback_header: None,
            hash_on_cookie: None,
            hash_on_cookie_path: "/".into(),
            slots: 10_000,
            healthchecks: None,
            host_header: None,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        json!({
            "name": self.name,
            "algorithm": self.algorithm,
            "hash_on": self.hash_on,
            "hash_fallback": self.hash_fallback,
            "hash_on_header": self.hash_on_header,
            "hash_fallback_header": self.hash_fallback_header,
            "hash_on_cookie": self.hash_on_cookie,
            "hash_on_cookie_path": self.hash_on_cookie_path,
            "slots": self.slots,
            "healthchecks": self.healthchecks,
            "host_header": self.host_header,
            "tags": default_tags(self.tags.as_deref(), &self.name),
        })
    }
}

/// `POST /upstreams/{id}/targets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTarget {
    /// `host:port` address of the member.
    pub target: String,
    /// 0-1000; 0 takes the target out of rotation.
    pub weight: u32,
    pub tags: Option<Vec<String>>,
}

impl NewTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            weight: 100,
            tags: None,
        }
    }

    pub fn to_body(&self) -> Value {
        json!({
            "target": self.target,
            "weight": self.weight,
            "tags": default_tags(self.tags.as_deref(), &self.target),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn service_four_part_form_without_url() {
        let body = NewService {
            host: Some("example.com".into()),
            ..NewService::new("svc-a")
        }
        .to_body();

        assert_eq!(
            body,
            json!({
                "name": "svc-a",
                "protocol": "http",
                "host": "example.com",
                "port": 80,
                "path": null,
                "retries": 5,
                "connect_timeout": 60000,
                "write_timeout": 60000,
                "read_timeout": 60000,
                "tags": ["svc-a"],
            })
        );
    }

    #[test]
    fn service_url_suppresses_four_part_fields() {
        let body = NewService {
            url: Some("https://upstream.internal:8443/v1".into()),
            host: Some("ignored.example.com".into()),
            ..NewService::new("svc-b")
        }
        .to_body();

        let obj = body.as_object().unwrap();
        assert_eq!(obj["url"], json!("https://upstream.internal:8443/v1"));
        for key in ["protocol", "host", "port", "path"] {
            assert!(!obj.contains_key(key), "{key} should be absent");
        }
    }

    #[test]
    fn service_client_certificate_is_a_reference() {
        let body = NewService {
            client_certificate: Some("cert-1".into()),
            ..NewService::new("svc-c")
        }
        .to_body();
        assert_eq!(body["client_certificate"], json!({ "id": "cert-1" }));
    }

    #[test]
    fn route_defaults_and_service_reference() {
        let body = NewRoute {
            service_id: Some("svc-123".into()),
            paths: Some(vec!["/orders".into()]),
            ..NewRoute::new("orders")
        }
        .to_body();

        assert_eq!(body["service"], json!({ "id": "svc-123" }));
        assert_eq!(body["protocols"], json!(["http", "https"]));
        assert_eq!(
            body["methods"],
            json!(["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "HEAD"])
        );
        assert_eq!(body["https_redirect_status_code"], json!(426));
        assert_eq!(body["preserve_host"], json!(true));
        assert_eq!(body["tags"], json!(["orders"]));
    }

    #[test]
    fn route_without_service_has_no_service_key() {
        let body = NewRoute::new("orphan").to_body();
        assert!(body.get("service").is_none());
    }

    #[test]
    fn consumer_requires_username_or_custom_id() {
        let err = NewConsumer::default().to_body().unwrap_err();
        assert!(matches!(err, Error::InvalidPayload(_)));

        let body = NewConsumer::with_custom_id("crm-42").to_body().unwrap();
        assert_eq!(
            body,
            json!({ "username": null, "custom_id": "crm-42", "tags": ["crm-42"] })
        );
    }

    #[test]
    fn plugin_scopes_are_references() {
        let mut config = Map::new();
        config.insert("minute".into(), json!(20));
        let body = NewPlugin {
            route_id: Some("r1".into()),
            consumer_id: Some("c1".into()),
            config: Some(config),
            ..NewPlugin::new("rate-limiting")
        }
        .to_body();

        assert_eq!(body["route"], json!({ "id": "r1" }));
        assert_eq!(body["consumer"], json!({ "id": "c1" }));
        assert!(body.get("service").is_none());
        assert_eq!(body["config"], json!({ "minute": 20 }));
        assert_eq!(body["run_on"], json!("first"));
        assert_eq!(body["tags"], json!(["rate-limiting"]));
    }

    #[test]
    fn certificate_tags_are_not_defaulted() {
        let body = NewCertificate::new("PEM", "KEY").to_body();
        assert_eq!(body["tags"], Value::Null);
    }

    #[test]
    fn target_tags_default_to_address() {
        let body = NewTarget::new("10.0.0.1:8080").to_body();
        assert_eq!(
            body,
            json!({ "target": "10.0.0.1:8080", "weight": 100, "tags": ["10.0.0.1:8080"] })
        );
    }

    #[test]
    fn sni_certificate_reference_and_tags() {
        let body = NewSni::new("api.example.com", "cert-9").to_body();
        assert_eq!(body["certificate"], json!({ "id": "cert-9" }));
        assert_eq!(body["tags"], json!(["api.example.com"]));
    }
}
