//! Framework-neutral response descriptor.

use axum::body::Bytes;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use serde::Serialize;

/// Status, headers and body produced by a handler.
///
/// Kept free of any server types so the dispatcher can be exercised
/// without a listener. The HTTP layer converts it at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
}

impl Reply {
    /// Status only, no headers, no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Body without a Content-Type header.
    pub fn raw(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Pre-serialized JSON body labelled `application/json`.
    pub fn json_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::raw(status, body).with_header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::json_bytes(status, body),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize reply body");
                Self::empty(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    /// First value of the named header.
    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_sets_content_type() {
        let reply = Reply::json(StatusCode::CREATED, &json!({"message": "User created"}));
        assert_eq!(reply.status, StatusCode::CREATED);
        assert_eq!(
            reply.header(&header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
        assert_eq!(body, json!({"message": "User created"}));
    }

    #[test]
    fn test_raw_has_no_headers() {
        let reply = Reply::raw(StatusCode::OK, "{\"data\": 1}");
        assert!(reply.headers.is_empty());
        assert_eq!(&reply.body[..], b"{\"data\": 1}");
    }

    #[test]
    fn test_empty() {
        let reply = Reply::empty(StatusCode::METHOD_NOT_ALLOWED);
        assert!(reply.body.is_empty());
        assert!(reply.header(&header::CONTENT_TYPE).is_none());
    }
}
