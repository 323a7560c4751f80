//! Catalog served under `/api/v3`.
//!
//! `/custom` is a single route for two methods and reports whichever
//! method the client actually sent.

use super::{message, product_list, user_list};
use crate::routing::handler::{created_with_data, method_echo, parsed_echo, wrapped_echo};
use crate::routing::RouteTableBuilder;

pub(super) fn register(builder: RouteTableBuilder) -> RouteTableBuilder {
    builder
        .route("/users", &["GET"], user_list("Charlie"))
        .route("/users", &["POST"], created_with_data("User created"))
        .route("/products", &["GET"], product_list("Thing"))
        .route("/products", &["POST"], created_with_data("Product created"))
        .route("/products", &["PUT"], message("Product updated"))
        .route("/products", &["DELETE"], message("Product deleted"))
        .route("/funkytown", &["FUNKYTOWN"], message("Echo Funkytown!"))
        .route("/dance", &["DANCE"], message("Echo Dance!"))
        .route("/custom", &["FUNKYTOWN", "PARTY"], method_echo("echo"))
        .any("/bad/no-method-check", message("Accepts any method - bad practice!"))
        .route("/bad/no-error-handling", &["POST"], parsed_echo())
        .route("/bad/no-validation", &["POST"], wrapped_echo())
        .route("/bad/no-error-return", &["GET"], message("Missing error return"))
}
