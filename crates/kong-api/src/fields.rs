//! Declarative field model for admin API resources.
//!
//! Every resource publishes a [`ResourceSchema`]: the keys an update may
//! carry and which of those keys name another entity. [`shape_update`]
//! turns caller-supplied changes into the body the admin API expects:
//! unknown keys are dropped and bare identifiers in reference fields become
//! `{"id": ...}` objects.

use serde::Serialize;
use serde_json::{Map, Value, json};
use percent_encoding::{
    AsciiSet, CONTROLS, NON_ALPHANUMERIC, PercentEncode, utf8_percent_encode,
};

use crate::error::Error;

/// Allowed update fields and reference fields of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub references: &'static [&'static str],
}

impl ResourceSchema {
    pub fn allows(&self, key: &str) -> bool {
        self.fields.contains(&key)
    }

    pub fn is_reference(&self, key: &str) -> bool {
        self.references.contains(&key)
    }
}

pub const SERVICE: ResourceSchema = ResourceSchema {
    name: "service",
    fields: &[
        "name",
        "protocol",
        "host",
        "port",
        "path",
        "url",
        "retries",
        "connect_timeout",
        "write_timeout",
        "read_timeout",
        "client_certificate",
        "tags",
    ],
    references: &["client_certificate"],
};

pub const ROUTE: ResourceSchema = ResourceSchema {
    name: "route",
    fields: &[
        "name",
        "hosts",
        "protocols",
        "methods",
        "paths",
        "headers",
        "https_redirect_status_code",
        "regex_priority",
        "strip_path",
        "preserve_host",
        "snis",
        "sources",
        "destinations",
        "service",
        "tags",
    ],
    references: &["service"],
};

pub const CONSUMER: ResourceSchema = ResourceSchema {
    name: "consumer",
    fields: &["username", "custom_id", "tags"],
    references: &[],
};

pub const PLUGIN: ResourceSchema = ResourceSchema {
    name: "plugin",
    fields: &[
        "name",
        "route",
        "service",
        "consumer",
        "config",
        "run_on",
        "protocols",
        "enabled",
        "tags",
    ],
    references: &["route", "service", "consumer"],
};

pub const CERTIFICATE: ResourceSchema = ResourceSchema {
    name: "certificate",
    fields: &["cert", "key", "tags", "snis"],
    references: &[],
};

pub const SNI: ResourceSchema = ResourceSchema {
    name: "sni",
    fields: &["name", "certificate", "tags"],
    references: &["certificate"],
};

pub const UPSTREAM: ResourceSchema = ResourceSchema {
    name: "upstream",
    fields: &[
        "name",
        "algorithm",
        "hash_on",
        "hash_fallback",
        "hash_on_header",
        "hash_fallback_header",
        "hash_on_cookie",
        "hash_on_cookie_path",
        "slots",
        "healthchecks",
        "tags",
        "host_header",
    ],
    references: &[],
};

pub const TARGET: ResourceSchema = ResourceSchema {
    name: "target",
    fields: &["target", "weight", "tags"],
    references: &[],
};

/// Shape caller-supplied changes into an update body.
///
/// `changes` must serialize to a JSON object. Keys outside the schema are
/// dropped entirely; reference fields holding a non-empty string are
/// wrapped as `{"id": <string>}`. Objects, `null` and empty strings in
/// reference fields are forwarded untouched so a relation can be detached.
pub fn shape_update<C>(schema: &ResourceSchema, changes: &C) -> Result<Map<String, Value>, Error>
where
    C: Serialize + ?Sized,
{
    let value = serde_json::to_value(changes)
        .map_err(|e| Error::InvalidPayload(format!("{} update: {e}", schema.name)))?;
    let Value::Object(raw) = value else {
        return Err(Error::InvalidPayload(format!(
            "{} update must be a JSON object",
            schema.name
        )));
    };

    Ok(raw
        .into_iter()
        .filter(|(key, _)| schema.allows(key))
        .map(|(key, value)| {
            let value = if schema.is_reference(&key) {
                normalize_reference(value)
            } else {
                value
            };
            (key, value)
        })
        .collect())
}

/// Wrap a bare identifier as a nested reference object.
pub fn reference_to(id: &str) -> Value {
    json!({ "id": id })
}

fn normalize_reference(value: Value) -> Value {
    match value {
        Value::String(id) if !id.is_empty() => reference_to(&id),
        other => other,
    }
}

/// The tags to send on creation: the caller's, or `[fallback]` when none were given.
pub fn default_tags(tags: Option<&[String]>, fallback: &str) -> Vec<String> {
    match tags {
        Some(tags) if !tags.is_empty() => tags.to_vec(),
        _ => vec![fallback.to_owned()],
    }
}

/// Characters escaped inside one path segment. `/`, `?` and `#` would
/// otherwise move the request to another endpoint.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in a `tags` filter. `,` (AND) and `/` (OR) stay literal.
const TAG_FILTER: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',')
    .remove(b'/');

/// Percent-encode a caller-supplied id or name for use as one path segment.
pub fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, SEGMENT)
}

/// Append a `?tags=` filter to a collection path when one is given.
pub fn tagged_path(path: &str, tags: Option<&str>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => {
            format!("{path}?tags={}", utf8_percent_encode(tags, TAG_FILTER))
        }
        _ => path.to_owned(),
    }
}
