use thiserror::Error;

/// Message used when the admin API answers with an empty body.
const DEFAULT_MESSAGE: &str = "An unexpected error occurred";

/// Top-level error type for the `kong-api` crate.
///
/// `UnexpectedStatus` is the only outcome derived from an HTTP response.
/// Transport failures are passed through as the `reqwest` error that caused
/// them; nothing here classifies a status as "not found" or "conflict" on
/// its own -- see the helper methods for that.
#[derive(Debug, Error)]
pub enum Error {
    // ── Admin API ───────────────────────────────────────────────────
    /// The admin API answered with a status other than the one the verb requires.
    #[error(
        "{} (Http {status}) (Method {method}) (Url {url})",
        message_or_default(.body)
    )]
    UnexpectedStatus {
        status: u16,
        body: String,
        method: reqwest::Method,
        url: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Building the HTTP client failed (bad TLS backend configuration).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// The response body was not the JSON shape we expected.
    #[error("Deserialization error: {message}")]
    Decode { message: String, body: String },

    /// The caller handed us a payload we refuse to send.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

fn message_or_default(body: &str) -> &str {
    if body.trim().is_empty() {
        DEFAULT_MESSAGE
    } else {
        body
    }
}

impl Error {
    /// HTTP status carried by an `UnexpectedStatus`, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the admin API reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the admin API rejected the write as a uniqueness clash.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Returns `true` for failures a caller could reasonably retry.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::UnexpectedStatus { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unexpected(status: u16, body: &str) -> Error {
        Error::UnexpectedStatus {
            status,
            body: body.into(),
            method: reqwest::Method::DELETE,
            url: "http://localhost:8001/services/svc-a".into(),
        }
    }

    #[test]
    fn renders_message_status_method_url_in_order() {
        let err = unexpected(404, r#"{"message":"Not found"}"#);
        assert_eq!(
            err.to_string(),
            r#"{"message":"Not found"} (Http 404) (Method DELETE) (Url http://localhost:8001/services/svc-a)"#
        );
    }

    #[test]
    fn empty_body_falls_back_to_default_message() {
        let err = unexpected(500, "");
        assert!(
            err.to_string()
                .starts_with("An unexpected error occurred (Http 500)")
        );
    }

    #[test]
    fn status_helpers() {
        assert!(unexpected(404, "").is_not_found());
        assert!(unexpected(409, "").is_conflict());
        assert!(unexpected(503, "").is_transient());
        assert!(!unexpected(400, "").is_transient());
        assert_eq!(Error::InvalidPayload("x".into()).status(), None);
    }
}
