//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use funky_router::config::AppConfig;
use funky_router::lifecycle::{launch, RunningServers};
use funky_router::{Flavor, HttpServer, Shutdown};

/// Response pieces captured from an in-process request.
pub struct Captured {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("body is not JSON ({e}): {:?}", String::from_utf8_lossy(&self.body))
        })
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}

/// Router for a flavor's default server.
pub fn router(flavor: Flavor) -> Router {
    HttpServer::for_flavor(flavor).unwrap().router()
}

/// Drive one request through `router` without a socket.
pub async fn send(router: &Router, method: &str, uri: &str, body: &str) -> Captured {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Captured {
        status,
        headers,
        body,
    }
}

/// Launch all five servers on ephemeral local ports.
pub async fn start_all() -> (RunningServers, Shutdown) {
    let mut config = AppConfig::default();
    for server in &mut config.servers {
        server.bind_address = "127.0.0.1:0".into();
    }
    let shutdown = Shutdown::new();
    let running = launch(&config, &shutdown).await.unwrap();
    (running, shutdown)
}
