//! Catalog served under `/api/v4`.

use super::{framework_method, message, product_list, user_list};
use crate::routing::handler::{created_with_data, parsed_echo, wrapped_echo};
use crate::routing::RouteTableBuilder;

pub(super) fn register(builder: RouteTableBuilder) -> RouteTableBuilder {
    builder
        .route("/users", &["GET"], user_list("David"))
        .route("/users", &["POST"], created_with_data("User created"))
        .route("/products", &["GET"], product_list("Widget"))
        .route("/products", &["POST"], created_with_data("Product created"))
        .route("/products", &["PUT"], message("Product updated"))
        .route("/products", &["DELETE"], message("Product deleted"))
        .route("/funkytown", &["FUNKYTOWN"], message("Fiber Funkytown!"))
        .route("/dance", &["DANCE"], message("Fiber Dance!"))
        .route("/custom", &["FUNKYTOWN"], framework_method("funkytown", "fiber"))
        .route("/custom", &["PARTY"], framework_method("party", "fiber"))
        .any("/bad/no-method-check", message("Accepts any method - bad practice!"))
        .route("/bad/no-error-handling", &["POST"], parsed_echo())
        .route("/bad/no-validation", &["POST"], wrapped_echo())
        .route("/bad/no-error-return", &["GET"], message("Missing error handling"))
}
