//! Storefront relay library.
//!
//! A stateless forwarder that attaches the Storefront access token to
//! GraphQL queries from the browser and returns Shopify's response untouched.
//! Exposed as a library so the router can be tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::RelayConfig;
pub use error::RelayError;
pub use routes::RELAY_PATH;
pub use state::AppState;

/// Build the relay application router.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
