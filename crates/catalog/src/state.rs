//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::render::RenderOptions;
use crate::session::CatalogSession;
use crate::shopify::CatalogClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The page serves a single
/// browsing session; its lock is never held across a relay call.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    catalog: CatalogClient,
    session: RwLock<CatalogSession>,
}

impl AppState {
    /// Create a new application state with an empty session.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        let catalog = CatalogClient::new(config.relay_url.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                session: RwLock::new(CatalogSession::new()),
            }),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get the relay client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get the browsing session.
    #[must_use]
    pub fn session(&self) -> &RwLock<CatalogSession> {
        &self.inner.session
    }

    /// Rendering options derived from configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        self.inner.config.render_options()
    }
}
