//! CORS headers for the relay endpoint.
//!
//! The relay answers browsers on any origin, so every response on the relay
//! route (success, preflight and error alike) carries the same fixed set of
//! headers, whether or not the request carried an `Origin`.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    middleware::Next,
    response::Response,
};

/// Add the relay's JSON content type and CORS headers to all responses.
///
/// Headers applied:
/// - `Content-Type: application/json`
/// - `Access-Control-Allow-Origin: *`
/// - `Access-Control-Allow-Headers: Content-Type`
/// - `Access-Control-Allow-Methods: POST, OPTIONS`
pub async fn cors_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );

    response
}
