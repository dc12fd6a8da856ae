//! HTTP route handlers for the catalog page.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Full page showing the current session state
//! POST /collections/load    - Fetch through the relay, return the display region
//! GET  /collections         - Back to the collection list (no fetch)
//! GET  /collections/{index} - Product grid of one stored collection (no fetch)
//! GET  /health              - Liveness check
//! ```
//!
//! Everything except `/` answers with the display-region fragment that the
//! page swaps into `#collections-container`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::{get, post},
};
use tracing::instrument;

use crate::error::Result;
use crate::render::{render_display, render_loading};
use crate::state::AppState;

/// Full catalog page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    /// Current display region.
    pub region: String,
    /// Loading indicator swapped into the region when a load starts.
    pub loading: String,
}

const PAGE_TITLE: &str = "Shopify Collections";

/// Render the page with the session's current display region.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<IndexTemplate> {
    let session = state.session().read().await;
    let region = render_display(&session, &state.render_options())?;

    Ok(IndexTemplate {
        title: PAGE_TITLE,
        region,
        loading: render_loading()?,
    })
}

/// Load collections through the relay and render the result.
///
/// The session lock is released while the relay call is in flight, so other
/// requests observe the loading state instead of blocking.
#[instrument(skip(state))]
pub async fn load(State(state): State<AppState>) -> Result<Html<String>> {
    state.session().write().await.begin_load();

    let result = state.catalog().get_collections(state.config().query).await;

    let mut session = state.session().write().await;
    session.finish_load(result);
    Ok(Html(render_display(&session, &state.render_options())?))
}

/// Re-render the collection list from the session.
#[instrument(skip(state))]
pub async fn collections(State(state): State<AppState>) -> Result<Html<String>> {
    let mut session = state.session().write().await;
    session.show_collections();
    Ok(Html(render_display(&session, &state.render_options())?))
}

/// Show the products of the stored collection at `index`.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Html<String>> {
    let mut session = state.session().write().await;
    session.select(index);
    Ok(Html(render_display(&session, &state.render_options())?))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the relay.
pub async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the catalog page.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/collections/load", post(load))
        .route("/collections", get(collections))
        .route("/collections/{index}", get(show))
        .route("/health", get(health))
}
