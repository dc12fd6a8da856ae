//! Relay configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Guarded per request
//! - `SHOPIFY_STORE` - Store name (the `<store>` in `<store>.myshopify.com`)
//! - `SHOPIFY_STOREFRONT_ACCESS_TOKEN` - Storefront API access token
//!
//! Both may be absent at start-up. The relay still binds, and every
//! forwarding request is answered with a 500 naming the missing variable.
//!
//! ## Optional
//! - `RELAY_HOST` - Bind address (default: 127.0.0.1)
//! - `RELAY_PORT` - Listen port (default: 8888)
//! - `SHOPIFY_DOMAIN` - Store domain suffix (default: myshopify.com)
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `SHOPIFY_STOREFRONT_ENDPOINT` - Full GraphQL endpoint URL, overrides the derived one
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::error::RelayError;

/// Store name variable.
pub const STORE_VAR: &str = "SHOPIFY_STORE";
/// Access token variable.
pub const ACCESS_TOKEN_VAR: &str = "SHOPIFY_STOREFRONT_ACCESS_TOKEN";

const DEFAULT_DOMAIN: &str = "myshopify.com";
const DEFAULT_API_VERSION: &str = "2026-01";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Relay application configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upstream Storefront API configuration
    pub shopify: ShopifyRelayConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Upstream Storefront API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyRelayConfig {
    /// Store name
    pub store: Option<String>,
    /// Storefront API access token (server-side only)
    pub access_token: Option<SecretString>,
    /// Domain the store lives under
    pub domain: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Full endpoint URL, replacing the one derived from store/domain/version
    pub endpoint_override: Option<String>,
}

impl std::fmt::Debug for ShopifyRelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyRelayConfig")
            .field("store", &self.store)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("domain", &self.domain)
            .field("api_version", &self.api_version)
            .field("endpoint_override", &self.endpoint_override)
            .finish()
    }
}

/// Where a single relay invocation forwards to, and with what credential.
pub struct UpstreamTarget<'a> {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Storefront access token.
    pub access_token: &'a SecretString,
}

impl RelayConfig {
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
        let host = get("RELAY_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELAY_HOST".to_string(), e.to_string()))?;
        let port = get("RELAY_PORT")
            .unwrap_or_else(|| "8888".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("RELAY_PORT".to_string(), e.to_string()))?;

        let shopify = ShopifyRelayConfig::from_source(&get)?;

        Ok(Self {
            host,
            port,
            shopify,
            sentry_dsn: non_empty(get("SENTRY_DSN")),
            sentry_environment: non_empty(get("SENTRY_ENVIRONMENT")),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyRelayConfig {
    fn from_source(get: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint_override = non_empty(get("SHOPIFY_STOREFRONT_ENDPOINT"));
        if let Some(endpoint) = &endpoint_override {
            url::Url::parse(endpoint).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPIFY_STOREFRONT_ENDPOINT".to_string(), e.to_string())
            })?;
        }

        Ok(Self {
            store: non_empty(get(STORE_VAR)),
            access_token: non_empty(get(ACCESS_TOKEN_VAR)).map(SecretString::from),
            domain: non_empty(get("SHOPIFY_DOMAIN")).unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            api_version: non_empty(get("SHOPIFY_API_VERSION"))
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            endpoint_override,
        })
    }

    /// Log warnings for absent or placeholder credentials.
    ///
    /// Called once the tracing subscriber is installed.
    pub fn warn_if_incomplete(&self) {
        let missing = self.missing();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "Storefront credentials not configured; relay requests will fail"
            );
        }

        if let Some(pattern) = self
            .access_token
            .as_ref()
            .and_then(|token| placeholder_pattern(token.expose_secret()))
        {
            tracing::warn!(pattern, "{ACCESS_TOKEN_VAR} appears to be a placeholder");
        }
    }

    /// Names of the required settings that are not configured.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.store.is_none() {
            missing.push(STORE_VAR);
        }
        if self.access_token.is_none() {
            missing.push(ACCESS_TOKEN_VAR);
        }
        missing
    }

    /// Build the GraphQL endpoint URL for a store.
    #[must_use]
    pub fn endpoint(&self, store: &str) -> String {
        self.endpoint_override.clone().unwrap_or_else(|| {
            format!(
                "https://{store}.{}/api/{}/graphql.json",
                self.domain, self.api_version
            )
        })
    }

    /// Resolve the forwarding target for one invocation.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MissingConfig` naming every absent setting.
    pub fn upstream_target(&self) -> Result<UpstreamTarget<'_>, RelayError> {
        match (&self.store, &self.access_token) {
            (Some(store), Some(access_token)) => Ok(UpstreamTarget {
                endpoint: self.endpoint(store),
                access_token,
            }),
            _ => Err(RelayError::MissingConfig(self.missing())),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat empty and whitespace-only values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Return the placeholder pattern a secret contains, if any.
fn placeholder_pattern(secret: &str) -> Option<&'static str> {
    let lower = secret.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
}
