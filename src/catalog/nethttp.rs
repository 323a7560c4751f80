//! Catalog served under `/api/v1`.
//!
//! Modelled on a hand-written multiplexer: users are created on a separate
//! `/users/create` path, `/custom` answers three methods with a "status"
//! field, and the bad endpoints include a body echo open to every method.

use axum::http::StatusCode;
use serde_json::json;

use super::{message, product_list, user_list};
use crate::routing::handler::{created_with_data, fixed_json, raw_echo, unlabelled_json, wrapped_echo};
use crate::routing::{Handler, RouteTableBuilder};

pub(super) fn register(builder: RouteTableBuilder) -> RouteTableBuilder {
    builder
        .route("/users", &["GET"], user_list("Alice"))
        .route("/users/create", &["POST"], created_with_data("User created"))
        .route("/products", &["GET"], product_list("Widget"))
        .route("/products", &["POST"], created_with_data("Product created"))
        .route("/products", &["PUT"], message("Product updated"))
        .route("/products", &["DELETE"], message("Product deleted"))
        .route("/funkytown", &["FUNKYTOWN"], message("Welcome to Funkytown!"))
        .route("/dance", &["DANCE"], message("Let's dance!"))
        .route("/custom", &["FUNKYTOWN"], status_reply("funkytown", "groovy"))
        .route("/custom", &["DANCE"], status_reply("dance", "moving"))
        .route("/custom", &["PARTY"], status_reply("party", "celebrating"))
        .any("/bad/no-method-check", message("No method validation - bad practice!"))
        .any("/bad/no-error-handling", raw_echo())
        .route(
            "/bad/no-content-type",
            &["GET"],
            unlabelled_json(StatusCode::OK, json!({ "data": "missing content-type" })),
        )
        .route("/bad/no-validation", &["POST"], wrapped_echo())
}

fn status_reply(method: &'static str, status: &'static str) -> impl Handler {
    fixed_json(StatusCode::OK, json!({ "method": method, "status": status }))
}
