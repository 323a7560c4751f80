//! Catalog served under `/api/v2`.
//!
//! Unmatched methods on known paths get a 200 instead of a 405.

use super::{framework_method, message, product_list, user_list};
use crate::routing::handler::{created_with_data, parsed_echo, wrapped_echo};
use crate::routing::RouteTableBuilder;

pub(super) fn register(builder: RouteTableBuilder) -> RouteTableBuilder {
    builder
        .route("/users", &["GET"], user_list("Bob"))
        .route("/users", &["POST"], created_with_data("User created"))
        .route("/products", &["GET"], product_list("Gadget"))
        .route("/products", &["POST"], created_with_data("Product created"))
        .route("/products", &["PUT"], message("Product updated"))
        .route("/products", &["DELETE"], message("Product deleted"))
        .route("/funkytown", &["FUNKYTOWN"], message("Gin Funkytown!"))
        .route("/dance", &["DANCE"], message("Gin Dance!"))
        .route("/custom", &["FUNKYTOWN"], framework_method("funkytown", "gin"))
        .route("/custom", &["PARTY"], framework_method("party", "gin"))
        .any("/bad/no-method-check", message("Accepts any method - bad practice!"))
        .route("/bad/no-error-handling", &["POST"], parsed_echo())
        .route("/bad/no-validation", &["POST"], wrapped_echo())
        .method_not_allowed(message("Method not allowed but returning 200"))
}
