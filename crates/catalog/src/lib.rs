//! Storefront catalog library.
//!
//! A small page server that loads collections and their products through
//! the storefront relay and renders them as browsable HTML. Exposed as a
//! library so the router and renderers can be tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod session;
pub mod shopify;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::CatalogConfig;
pub use error::AppError;
pub use render::{RenderMode, RenderOptions};
pub use session::{CatalogSession, load_collections};
pub use shopify::{CatalogClient, CatalogError, QueryVariant};
pub use state::AppState;

/// Build the catalog application router.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
