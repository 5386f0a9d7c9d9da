// Admin API entity types
//
// Records returned by the admin API. Commonly used fields are explicit;
// everything else lands in `extra`. A decoded record serializes back to
// the keys the server sent: absent keys stay absent and explicit `null`s
// are written again as `null`, even for fields that decode to `None`.

use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Entities decode through a plain JSON object so the keys sent as `null`
/// can be replayed on serialization. The derived field handling lives in
/// the `remote = "Self"` functions.
macro_rules! keep_null_keys {
    ($($entity:ident),* $(,)?) => {$(
        impl<'de> Deserialize<'de> for $entity {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let map = Map::<String, Value>::deserialize(deserializer)?;
                let nulls = null_keys(&map);
                let mut entity =
                    $entity::deserialize(Value::Object(map)).map_err(de::Error::custom)?;
                entity.nulls = nulls;
                Ok(entity)
            }
        }

        impl Serialize for $entity {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut value = $entity::serialize(self, serde_json::value::Serializer)
                    .map_err(ser::Error::custom)?;
                if let Value::Object(map) = &mut value {
                    for key in &self.nulls {
                        map.entry(key.clone()).or_insert(Value::Null);
                    }
                }
                value.serialize(serializer)
            }
        }
    )*};
}

fn null_keys(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .filter(|(_, value)| value.is_null())
        .map(|(key, _)| key.clone())
        .collect()
}

keep_null_keys!(
    Service,
    Route,
    Consumer,
    Plugin,
    Certificate,
    Sni,
    Upstream,
    Target,
    UpstreamHealth,
    NodeStatus,
);

/// A nested foreign key: `{ "id": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
}

// ── Service ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Service {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Route ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Route {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_redirect_status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_path: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_host: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snis: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Consumer ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Consumer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Plugin ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Plugin {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Certificate / SNI ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Certificate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snis: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Sni {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Upstream / Target ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Upstream {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_fallback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_on_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_fallback_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_on_cookie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_on_cookie_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthchecks: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

/// A load-balancer member. `health` is only present on the health and
/// `targets/all` views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Target {
    pub id: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

/// Response of `GET /upstreams/{id}/health/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct UpstreamHealth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Vec<Target>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

// ── Node status ──────────────────────────────────────────────────────

/// Response of `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct NodeStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    nulls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStatus {
    pub reachable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nginx connection counters of the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_accepted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_handled: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_active: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_reading: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_writing: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_waiting: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ── Tag ──────────────────────────────────────────────────────────────

/// One row of `/tags` or `/tags/{tag}`: which entity carries which tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEntity {
    pub entity_name: String,
    pub entity_id: String,
    pub tag: String,
}
