//! Response conversion.
//!
//! # Responsibilities
//! - Turn a dispatcher `Reply` into an HTTP response
//! - Never invent headers the handler did not ask for
//!
//! # Design Decisions
//! - No Content-Type is added when the handler left it out
//! - Request ID is attached by middleware, not here

use axum::body::Body;
use axum::response::{IntoResponse, Response};

use crate::routing::Reply;

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        for (name, value) in self.headers {
            headers.append(name, value);
        }
        response
    }
}
