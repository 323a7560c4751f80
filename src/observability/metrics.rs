//! Metrics collection and exposition.
//!
//! # Metrics
//! - `demo_requests_total` (counter): requests by server, method, status
//! - `demo_request_duration_seconds` (histogram): dispatch latency by server
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Method label is bucketed to keep arbitrary client tokens out of it

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Label used for methods no route lists explicitly.
pub const OTHER_METHOD: &str = "OTHER";

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one dispatched request.
pub fn record_request(server: &str, method: &str, status: u16, start: Instant) {
    counter!(
        "demo_requests_total",
        "server" => server.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("demo_request_duration_seconds", "server" => server.to_string())
        .record(start.elapsed().as_secs_f64());
}
