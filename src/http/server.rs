//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Translate requests into dispatcher input and replies back
//! - Serve until the shutdown signal fires

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::Flavor;
use crate::config::{LimitsConfig, ServerConfig, TimeoutConfig};
use crate::http::request::{into_dispatch_request, request_id, MakeRequestUuid};
use crate::observability::metrics;
use crate::routing::{Dispatcher, RouteError, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub server: Arc<str>,
    pub dispatcher: Arc<Dispatcher>,
    pub max_body_bytes: usize,
}

/// One listener serving one route table.
pub struct HttpServer {
    name: String,
    router: Router,
    table: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a server for the configured flavor's catalog.
    pub fn new(
        config: &ServerConfig,
        limits: &LimitsConfig,
        timeouts: &TimeoutConfig,
    ) -> Result<Self, Vec<RouteError>> {
        let table = config.flavor.route_table()?;
        Ok(Self::with_table(&config.name, table, limits, timeouts))
    }

    /// Create a server for the default configuration of a flavor.
    pub fn for_flavor(flavor: Flavor) -> Result<Self, Vec<RouteError>> {
        Self::new(
            &ServerConfig::for_flavor(flavor),
            &LimitsConfig::default(),
            &TimeoutConfig::default(),
        )
    }

    /// Create a server around an already-built table.
    pub fn with_table(
        name: &str,
        table: RouteTable,
        limits: &LimitsConfig,
        timeouts: &TimeoutConfig,
    ) -> Self {
        let table = Arc::new(table);
        let state = AppState {
            server: Arc::from(name),
            dispatcher: Arc::new(Dispatcher::new(table.clone())),
            max_body_bytes: limits.max_body_bytes,
        };

        Self {
            name: name.to_string(),
            router: Self::build_router(timeouts, state),
            table,
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added last run first: the request ID is set before tracing
    /// opens its span, and copied onto the response on the way out.
    #[allow(deprecated)]
    fn build_router(timeouts: &TimeoutConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The fully layered router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, accepting on `listener`.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            server = %self.name,
            address = %addr,
            routes = self.table.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(server = %self.name, "HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: every method, every path.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request_id(&request);

    let dispatch_request = match into_dispatch_request(request, state.max_body_bytes).await {
        Ok(r) => r,
        Err(reply) => {
            metrics::record_request(&state.server, metrics::OTHER_METHOD, reply.status.as_u16(), start);
            return reply.into_response();
        }
    };

    let reply = state.dispatcher.dispatch(&dispatch_request);

    tracing::debug!(
        request_id = %request_id,
        server = %state.server,
        method = %dispatch_request.method,
        path = %dispatch_request.path,
        status = reply.status.as_u16(),
        "Dispatched request"
    );

    let method_label = if state.dispatcher.table().knows_method(&dispatch_request.method) {
        dispatch_request.method.as_str()
    } else {
        metrics::OTHER_METHOD
    };
    metrics::record_request(&state.server, method_label, reply.status.as_u16(), start);

    reply.into_response()
}
