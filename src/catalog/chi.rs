//! Catalog served under `/api/v5`.
//!
//! Create endpoints acknowledge without echoing the body, and
//! `/bad/no-validation` ignores its input entirely.

use axum::http::StatusCode;
use serde_json::json;

use super::{framework_method, message, product_list, user_list};
use crate::routing::handler::{fixed_json, raw_echo, unlabelled_json};
use crate::routing::RouteTableBuilder;

pub(super) fn register(builder: RouteTableBuilder) -> RouteTableBuilder {
    builder
        .route("/users", &["GET"], user_list("Eve"))
        .route(
            "/users",
            &["POST"],
            fixed_json(StatusCode::CREATED, json!({ "message": "User created" })),
        )
        .route("/products", &["GET"], product_list("Item"))
        .route(
            "/products",
            &["POST"],
            fixed_json(StatusCode::CREATED, json!({ "message": "Product created" })),
        )
        .route("/products", &["PUT"], message("Product updated"))
        .route("/products", &["DELETE"], message("Product deleted"))
        .route("/funkytown", &["FUNKYTOWN"], message("Chi Funkytown!"))
        .route("/dance", &["DANCE"], message("Chi Dance!"))
        .route("/custom", &["FUNKYTOWN"], framework_method("funkytown", "chi"))
        .route("/custom", &["PARTY"], framework_method("party", "chi"))
        .any("/bad/no-method-check", message("Accepts any method - bad practice!"))
        .route("/bad/no-error-handling", &["POST"], raw_echo())
        .route("/bad/no-validation", &["POST"], message("No validation performed"))
        .route(
            "/bad/no-content-type",
            &["GET"],
            unlabelled_json(StatusCode::OK, json!({ "data": "missing content-type" })),
        )
}
