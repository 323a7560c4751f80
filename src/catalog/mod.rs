//! Endpoint catalogs.
//!
//! Five servers expose the same endpoint shapes under different version
//! prefixes. Each flavor keeps the wording and quirks of the server it is
//! named after, including the deliberately bad endpoints.
//!
//! | flavor    | prefix    | default port |
//! |-----------|-----------|--------------|
//! | `nethttp` | `/api/v1` | 8080         |
//! | `gin`     | `/api/v2` | 8081         |
//! | `echo`    | `/api/v3` | 8082         |
//! | `fiber`   | `/api/v4` | 8083         |
//! | `chi`     | `/api/v5` | 8084         |

mod chi;
mod echo;
mod fiber;
mod gin;
mod nethttp;

use std::fmt;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::routing::handler::fixed_json;
use crate::routing::{Handler, RouteError, RouteTable};

/// Which catalog a server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[value(name = "nethttp")]
    NetHttp,
    Gin,
    Echo,
    Fiber,
    Chi,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Flavor::NetHttp,
        Flavor::Gin,
        Flavor::Echo,
        Flavor::Fiber,
        Flavor::Chi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Flavor::NetHttp => "nethttp",
            Flavor::Gin => "gin",
            Flavor::Echo => "echo",
            Flavor::Fiber => "fiber",
            Flavor::Chi => "chi",
        }
    }

    pub fn version(self) -> u8 {
        match self {
            Flavor::NetHttp => 1,
            Flavor::Gin => 2,
            Flavor::Echo => 3,
            Flavor::Fiber => 4,
            Flavor::Chi => 5,
        }
    }

    /// Path prefix shared by every endpoint, e.g. `/api/v3`.
    pub fn prefix(self) -> String {
        format!("/api/v{}", self.version())
    }

    pub fn default_port(self) -> u16 {
        8079 + u16::from(self.version())
    }

    /// Build this flavor's route table.
    pub fn route_table(self) -> Result<RouteTable, Vec<RouteError>> {
        let builder = RouteTable::builder().prefix(self.prefix());
        let builder = match self {
            Flavor::NetHttp => nethttp::register(builder),
            Flavor::Gin => gin::register(builder),
            Flavor::Echo => echo::register(builder),
            Flavor::Fiber => fiber::register(builder),
            Flavor::Chi => chi::register(builder),
        };
        builder.build()
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn message(text: &'static str) -> impl Handler {
    fixed_json(StatusCode::OK, json!({ "message": text }))
}

fn user_list(name: &'static str) -> impl Handler {
    fixed_json(StatusCode::OK, json!({ "users": [{ "id": 1, "name": name }] }))
}

fn product_list(name: &'static str) -> impl Handler {
    fixed_json(StatusCode::OK, json!({ "products": [{ "id": 1, "name": name }] }))
}

fn framework_method(method: &'static str, framework: &'static str) -> impl Handler {
    fixed_json(StatusCode::OK, json!({ "method": method, "framework": framework }))
}
