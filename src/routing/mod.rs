//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path, body)
//!     → dispatch.rs (path lookup, method check)
//!     → table.rs (ordered routes sharing the path)
//!     → handler.rs (build the fixed reply)
//!     → Return: Reply (status, headers, body)
//!
//! Route Compilation (at startup):
//!     RouteTableBuilder
//!     → Parse method tokens
//!     → Reject shadowed and duplicate routes
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables are built once per server and shared via Arc
//! - Method names compare case-sensitively, byte for byte
//! - Non-standard method tokens are first-class
//! - First registered route wins when several share a path

pub mod dispatch;
pub mod handler;
pub mod method;
pub mod reply;
pub mod table;

use thiserror::Error;

pub use dispatch::Dispatcher;
pub use handler::{DispatchRequest, Handler};
pub use method::{MethodName, MethodSet};
pub use reply::Reply;
pub use table::{Route, RouteTable, RouteTableBuilder};

/// Errors raised while assembling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Method is empty or contains bytes outside the HTTP token set.
    #[error("invalid method token {0:?}")]
    InvalidMethod(String),

    /// Path does not start with '/'.
    #[error("path {0:?} must start with '/'")]
    InvalidPath(String),

    /// Route registered with no methods at all.
    #[error("route {path} has an empty method set")]
    EmptyMethodSet { path: String },

    /// Same method registered twice on the same path.
    #[error("method {method} registered twice on {path}")]
    DuplicateMethod { path: String, method: String },

    /// Route can never match because an earlier catch-all owns the path.
    #[error("route on {path} is shadowed by an earlier catch-all route")]
    Shadowed { path: String },
}
