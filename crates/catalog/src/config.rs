//! Catalog page server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_HOST` - Bind address (default: 127.0.0.1)
//! - `CATALOG_PORT` - Listen port (default: 3000)
//! - `CATALOG_RELAY_URL` - Relay endpoint (default: <http://127.0.0.1:8888/api/shopify>)
//! - `CATALOG_RENDER_MODE` - `drilldown` or `nested` (default: drilldown)
//! - `CATALOG_QUERY` - `full` or `basic` (default: full)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::render::{RenderMode, RenderOptions};
use crate::shopify::QueryVariant;

const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8888/api/shopify";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Relay endpoint the catalog posts queries to
    pub relay_url: String,
    /// How the collection list is shown
    pub render_mode: RenderMode,
    /// Which collections query to send
    pub query: QueryVariant,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&get, "CATALOG_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_or(&get, "CATALOG_PORT", 3000_u16)?;
        let render_mode = parse_or(&get, "CATALOG_RENDER_MODE", RenderMode::default())?;
        let query = parse_or(&get, "CATALOG_QUERY", QueryVariant::default())?;

        let relay_url = non_empty(get("CATALOG_RELAY_URL"))
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        url::Url::parse(&relay_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_RELAY_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            host,
            port,
            relay_url,
            render_mode,
            query,
            sentry_dsn: non_empty(get("SENTRY_DSN")),
            sentry_environment: non_empty(get("SENTRY_ENVIRONMENT")),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Rendering options implied by this configuration.
    ///
    /// Stock lines are only shown for the query that fetches inventory.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.render_mode,
            show_inventory: self.query.includes_inventory(),
        }
    }
}

/// Parse `key` if set and non-empty, otherwise use `default`.
fn parse_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(get(key)) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
