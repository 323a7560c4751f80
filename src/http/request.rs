//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Buffer the body up to the configured limit
//! - Reduce an HTTP request to the dispatcher's input
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Method tokens pass through untouched, whatever their case

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::routing::{DispatchRequest, Reply};

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request ID of an incoming request, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Buffer the body and split out what the dispatcher needs.
///
/// Bodies over `limit` bytes are answered with 413.
pub async fn into_dispatch_request(
    request: Request<Body>,
    limit: usize,
) -> Result<DispatchRequest, Reply> {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::warn!(error = %e, limit, "Failed to buffer request body");
        Reply::empty(StatusCode::PAYLOAD_TOO_LARGE)
    })?;

    Ok(DispatchRequest {
        method: parts.method.as_str().to_string(),
        path: parts.uri.path().to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_custom_method_survives() {
        let request = Request::builder()
            .method("FUNKYTOWN")
            .uri("http://localhost/api/v1/funkytown?x=1")
            .body(Body::from("groove"))
            .unwrap();

        let dispatch = into_dispatch_request(request, 1024).await.unwrap();
        assert_eq!(dispatch.method, "FUNKYTOWN");
        assert_eq!(dispatch.path, "/api/v1/funkytown");
        assert_eq!(&dispatch.body[..], b"groove");
    }

    #[tokio::test]
    async fn test_lowercase_method_is_not_normalized() {
        let request = Request::builder()
            .method("funkytown")
            .uri("/api/v1/funkytown")
            .body(Body::empty())
            .unwrap();

        let dispatch = into_dispatch_request(request, 1024).await.unwrap();
        assert_eq!(dispatch.method, "funkytown");
    }

    #[tokio::test]
    async fn test_oversized_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users/create")
            .body(Body::from(vec![b'x'; 64]))
            .unwrap();

        let reply = into_dispatch_request(request, 16).await.unwrap_err();
        assert_eq!(reply.status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_make_request_id_is_uuid() {
        let request = Request::builder().body(()).unwrap();
        let id = MakeRequestUuid.make_request_id(&request).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[test]
    fn test_request_id_fallback() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(request_id(&request), "unknown");

        let request = Request::builder()
            .header(X_REQUEST_ID, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "abc-123");
    }
}
