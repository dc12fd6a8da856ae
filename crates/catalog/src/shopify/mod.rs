//! Catalog client: Shopify Storefront data through the relay.
//!
//! # Architecture
//!
//! - Queries are fixed documents (see [`queries`]) posted to the relay as
//!   `{"query": ...}`; the relay attaches the access token
//! - The relay returns Shopify's body verbatim, so GraphQL `errors` are
//!   interpreted here
//! - No caching and no retries: one failed attempt ends the load
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::shopify::{CatalogClient, QueryVariant};
//!
//! let client = CatalogClient::new("http://127.0.0.1:8888/api/shopify");
//! let collections = client.get_collections(QueryVariant::Full).await?;
//! ```

pub mod conversions;
pub mod queries;
pub mod wire;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use storefront_relay_core::graphql::format_graphql_errors;
use storefront_relay_core::types::Collection;
use storefront_relay_core::{GraphQLError, GraphQLRequest};
use thiserror::Error;
use tracing::instrument;

pub use queries::QueryVariant;

use conversions::convert_collections;
use wire::{CollectionsData, GraphQLResponse, RelayErrorBody};

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The relay could not be reached.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("Relay error ({status}): {message}")]
    Relay {
        /// Status returned by the relay.
        status: StatusCode,
        /// The relay's `error` message, or a prefix of the body.
        message: String,
    },

    /// The payload was not a GraphQL response.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload carried a non-empty `errors` array.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),
}

impl CatalogError {
    /// Text shown to the user in place of the catalog.
    ///
    /// Protocol errors surface the first GraphQL message, relay failures
    /// their `error` message; transport and decoding failures get a generic
    /// message and are only detailed in the logs.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::GraphQL(errors) => errors
                .first()
                .map(|e| e.message.clone())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format_graphql_errors(errors)),
            Self::Relay { message, .. } => message.clone(),
            Self::Http(_) => "Could not reach the catalog service".to_string(),
            Self::Parse(_) => "The catalog service returned an invalid response".to_string(),
        }
    }
}

/// Client for the storefront relay.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    relay_url: String,
}

impl CatalogClient {
    /// Create a new client for the relay at `relay_url`.
    #[must_use]
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                relay_url: relay_url.into(),
            }),
        }
    }

    /// The relay endpoint this client posts to.
    #[must_use]
    pub fn relay_url(&self) -> &str {
        &self.inner.relay_url
    }

    /// Execute a GraphQL query through the relay and unwrap `data`.
    async fn execute<T: DeserializeOwned>(&self, query: &str) -> Result<Option<T>, CatalogError> {
        let response = self
            .inner
            .client
            .post(&self.inner.relay_url)
            .json(&GraphQLRequest::new(query))
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        tracing::debug!(
            status = %status,
            body = %response_text.chars().take(2000).collect::<String>(),
            "Relay response"
        );

        if !status.is_success() {
            let message = serde_json::from_str::<RelayErrorBody>(&response_text).map_or_else(
                |_| response_text.chars().take(200).collect::<String>(),
                |body| body.error,
            );
            tracing::error!(status = %status, message = %message, "Relay returned non-success status");
            return Err(CatalogError::Relay { status, message });
        }

        let response: GraphQLResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse GraphQL response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        if !response.errors.is_empty() {
            tracing::error!(errors = ?response.errors, "GraphQL errors in response");
            return Err(CatalogError::GraphQL(response.errors));
        }

        Ok(response.data)
    }

    /// Fetch collections with their nested products.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay cannot be reached, fails, returns an
    /// undecodable payload, or the payload carries GraphQL errors. A
    /// payload without `collections` is not an error and yields an empty
    /// list.
    #[instrument(skip(self))]
    pub async fn get_collections(
        &self,
        variant: QueryVariant,
    ) -> Result<Vec<Collection>, CatalogError> {
        let data = self.execute::<CollectionsData>(variant.document()).await?;
        Ok(convert_collections(data))
    }
}
