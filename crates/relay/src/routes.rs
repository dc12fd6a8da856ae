//! HTTP route handlers for the relay.
//!
//! # Route Structure
//!
//! ```text
//! POST    /api/shopify   - Forward `{"query": ...}` to the Storefront API
//! OPTIONS /api/shopify   - CORS preflight (no upstream call)
//! *       /api/shopify   - 405
//! GET     /health        - Liveness check
//! ```

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use storefront_relay_core::GraphQLRequest;
use tracing::instrument;

use crate::error::{RelayError, Result};
use crate::middleware::cors_headers_middleware;
use crate::state::AppState;
use crate::upstream;

/// Path the relay is mounted on.
pub const RELAY_PATH: &str = "/api/shopify";

/// Relay one GraphQL request.
///
/// Guards run in order: method, configuration, body. Only a `POST` that
/// passes all three reaches the upstream, and its body comes back verbatim
/// with status 200.
#[instrument(skip_all, fields(method = %method))]
pub async fn relay(State(state): State<AppState>, method: Method, body: Bytes) -> Result<Response> {
    match method {
        Method::OPTIONS => return Ok(StatusCode::OK.into_response()),
        Method::POST => {}
        _ => return Err(RelayError::MethodNotAllowed),
    }

    let target = state.config().shopify.upstream_target()?;
    let request: GraphQLRequest = serde_json::from_slice(&body).map_err(RelayError::InvalidBody)?;

    tracing::debug!(query_len = request.query.len(), "Forwarding query");
    let payload = upstream::forward(state.http(), &target, &request).await?;

    Ok((StatusCode::OK, payload).into_response())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the upstream.
pub async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the relay.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(RELAY_PATH, any(relay))
        .layer(middleware::from_fn(cors_headers_middleware))
        .route("/health", get(health))
}
