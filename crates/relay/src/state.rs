//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::RelayConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything behind it is
/// read-only for the lifetime of the process; each relay invocation owns
/// only its own request-scoped values.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RelayConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                http: reqwest::Client::new(),
            }),
        }
    }

    /// Get a reference to the relay configuration.
    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    /// Get the HTTP client used for upstream calls.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}
