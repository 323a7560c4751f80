//! Route storage and construction.
//!
//! # Responsibilities
//! - Store routes in registration order
//! - Index routes by exact path for lookup
//! - Validate the whole table before it is frozen
//!
//! # Design Decisions
//! - Immutable after `build()` (shared between connections without locks)
//! - O(1) path lookup via HashMap, O(k) scan over routes sharing a path
//! - Every construction error is reported, not just the first

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::routing::{Handler, MethodSet, RouteError};

/// One entry of a route table.
#[derive(Clone)]
pub struct Route {
    path: String,
    methods: MethodSet,
    handler: Arc<dyn Handler>,
}

impl Route {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

/// Immutable, ordered collection of routes.
#[derive(Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, Vec<usize>>,
    method_not_allowed: Option<Arc<dyn Handler>>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// All routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Routes registered on exactly this path, in registration order.
    pub fn routes_for<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a Route> + 'a {
        self.by_path
            .get(path)
            .into_iter()
            .flatten()
            .map(move |&index| &self.routes[index])
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Distinct paths in registration order.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for route in &self.routes {
            if !paths.contains(&route.path.as_str()) {
                paths.push(&route.path);
            }
        }
        paths
    }

    /// True if some route lists this method explicitly.
    pub fn knows_method(&self, method: &str) -> bool {
        self.routes
            .iter()
            .any(|route| route.methods.methods().iter().any(|name| name == method))
    }

    /// Override used instead of a bare 405.
    pub fn method_not_allowed(&self) -> Option<&dyn Handler> {
        self.method_not_allowed.as_deref()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .field("method_not_allowed", &self.method_not_allowed.is_some())
            .finish()
    }
}

/// Collects routes, then validates and freezes them.
#[derive(Default)]
pub struct RouteTableBuilder {
    prefix: String,
    routes: Vec<Route>,
    errors: Vec<RouteError>,
    method_not_allowed: Option<Arc<dyn Handler>>,
}

impl RouteTableBuilder {
    /// Prepended to every path registered afterwards.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Register `handler` for `path` and the listed methods.
    pub fn route<H>(mut self, path: &str, methods: &[&str], handler: H) -> Self
    where
        H: Handler + 'static,
    {
        match MethodSet::only(methods.iter().copied()) {
            Ok(set) => self.push(path, set, Arc::new(handler)),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Register `handler` for `path` regardless of method.
    pub fn any<H>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.push(path, MethodSet::Any, Arc::new(handler));
        self
    }

    /// Answer unmatched methods on known paths with `handler` instead of 405.
    pub fn method_not_allowed<H>(mut self, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.method_not_allowed = Some(Arc::new(handler));
        self
    }

    fn push(&mut self, path: &str, methods: MethodSet, handler: Arc<dyn Handler>) {
        let full_path = format!("{}{}", self.prefix, path);
        if !full_path.starts_with('/') {
            self.errors.push(RouteError::InvalidPath(full_path));
            return;
        }
        if let MethodSet::Only(names) = &methods {
            if names.is_empty() {
                self.errors.push(RouteError::EmptyMethodSet { path: full_path });
                return;
            }
        }

        for earlier in self.routes.iter().filter(|r| r.path == full_path) {
            if earlier.methods.is_any() {
                self.errors.push(RouteError::Shadowed {
                    path: full_path.clone(),
                });
                continue;
            }
            for name in methods.methods() {
                if earlier.methods.contains(name.as_str()) {
                    self.errors.push(RouteError::DuplicateMethod {
                        path: full_path.clone(),
                        method: name.to_string(),
                    });
                }
            }
        }

        self.routes.push(Route {
            path: full_path,
            methods,
            handler,
        });
    }

    pub fn build(self) -> Result<RouteTable, Vec<RouteError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        let mut by_path: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, route) in self.routes.iter().enumerate() {
            by_path.entry(route.path.clone()).or_default().push(index);
        }

        Ok(RouteTable {
            routes: self.routes,
            by_path,
            method_not_allowed: self.method_not_allowed,
        })
    }
}
