//! Request dispatch over a route table.
//!
//! # Responsibilities
//! - Look up the request path (exact, case-sensitive)
//! - Pick the first route whose method set accepts the method
//! - Produce 404 / 405 for unknown paths and methods
//!
//! # Design Decisions
//! - Synchronous and total: every input yields a reply
//! - 405 replies carry an `Allow` header and no body
//! - A table may replace the 405 with its own handler

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};

use crate::routing::{DispatchRequest, Reply, RouteTable};

/// Routes requests through an immutable route table.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: Arc<RouteTable>,
}

impl Dispatcher {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn dispatch(&self, request: &DispatchRequest) -> Reply {
        if !self.table.contains_path(&request.path) {
            return Reply::empty(StatusCode::NOT_FOUND);
        }

        if let Some(route) = self
            .table
            .routes_for(&request.path)
            .find(|route| route.methods().contains(&request.method))
        {
            return route.handler().call(request);
        }

        if let Some(handler) = self.table.method_not_allowed() {
            return handler.call(request);
        }

        let reply = Reply::empty(StatusCode::METHOD_NOT_ALLOWED);
        match HeaderValue::from_str(&self.allowed_methods(&request.path)) {
            Ok(allow) => reply.with_header(header::ALLOW, allow),
            Err(_) => reply,
        }
    }

    /// Union of the methods registered on `path`, in registration order.
    fn allowed_methods(&self, path: &str) -> String {
        let mut names: Vec<&str> = Vec::new();
        for route in self.table.routes_for(path) {
            for name in route.methods().methods() {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names.join(", ")
    }
}
