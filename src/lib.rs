//! Five demo HTTP servers sharing one dispatcher.
//!
//! Each server exposes the same catalog shape (CRUD verbs, the non-standard
//! methods `FUNKYTOWN`, `DANCE` and `PARTY`, and a few deliberately bad
//! endpoints) under its own version prefix. Route tables are plain data;
//! Axum only appears at the HTTP boundary.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use catalog::Flavor;
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{DispatchRequest, Dispatcher, Reply, RouteTable};
