//! Handler trait and the reply builders shared by every catalog.
//!
//! Handlers are pure: the reply depends only on the request and on data
//! captured when the table was built. None of them can fail.

use axum::body::Bytes;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::routing::Reply;

/// Input handed to the dispatcher and to handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub method: String,
    pub path: String,
    pub body: Bytes,
}

impl DispatchRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: body.into(),
        }
    }

    /// Borrow the body as a JSON document, if it is one.
    pub fn json_body(&self) -> Option<&RawValue> {
        serde_json::from_slice::<&RawValue>(&self.body).ok()
    }
}

/// Turns a request into a reply.
pub trait Handler: Send + Sync {
    fn call(&self, request: &DispatchRequest) -> Reply;
}

impl<F> Handler for F
where
    F: Fn(&DispatchRequest) -> Reply + Send + Sync,
{
    fn call(&self, request: &DispatchRequest) -> Reply {
        self(request)
    }
}

const INVALID_JSON: &str = "request body is not valid JSON";

#[derive(Serialize)]
struct Created<'a> {
    message: &'a str,
    data: &'a RawValue,
}

#[derive(Serialize)]
struct Echoed<'a> {
    echo: Option<&'a RawValue>,
}

#[derive(Serialize)]
struct MethodEcho<'a> {
    method: &'a str,
    framework: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Same JSON reply for every request. Serialized once, here.
pub fn fixed_json(status: StatusCode, value: Value) -> impl Handler {
    let reply = Reply::json(status, &value);
    move |_: &DispatchRequest| reply.clone()
}

/// Same JSON body for every request, but no Content-Type header.
pub fn unlabelled_json(status: StatusCode, value: Value) -> impl Handler {
    let body = Bytes::from(value.to_string());
    move |_: &DispatchRequest| Reply::raw(status, body.clone())
}

/// `201 {"message": ..., "data": <body>}` with the body embedded byte for byte.
///
/// Malformed bodies are rejected with 400.
pub fn created_with_data(message: &'static str) -> impl Handler {
    move |request: &DispatchRequest| match request.json_body() {
        Some(data) => Reply::json(StatusCode::CREATED, &Created { message, data }),
        None => Reply::json(StatusCode::BAD_REQUEST, &ErrorBody { error: INVALID_JSON }),
    }
}

/// `200 {"echo": <body>}`. Malformed bodies silently become `null`.
pub fn wrapped_echo() -> impl Handler {
    |request: &DispatchRequest| {
        Reply::json(
            StatusCode::OK,
            &Echoed {
                echo: request.json_body(),
            },
        )
    }
}

/// `200 <body>` if the body is JSON, `200 null` otherwise.
pub fn parsed_echo() -> impl Handler {
    |request: &DispatchRequest| match request.json_body() {
        Some(body) => Reply::json_bytes(StatusCode::OK, Bytes::copy_from_slice(body.get().as_bytes())),
        None => Reply::json_bytes(StatusCode::OK, Bytes::from_static(b"null")),
    }
}

/// `200` with the request body returned unchanged, whatever it contains.
pub fn raw_echo() -> impl Handler {
    |request: &DispatchRequest| Reply::json_bytes(StatusCode::OK, request.body.clone())
}

/// `200 {"method": <request method>, "framework": name}`.
pub fn method_echo(framework: &'static str) -> impl Handler {
    move |request: &DispatchRequest| {
        Reply::json(
            StatusCode::OK,
            &MethodEcho {
                method: &request.method,
                framework,
            },
        )
    }
}
