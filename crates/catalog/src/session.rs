//! Browsing session state.
//!
//! The session owns the last fetched collection list and what the display
//! region currently shows. Rendering reads it; only the transitions below
//! change it, and the list is only ever replaced wholesale.

use storefront_relay_core::types::Collection;
use tracing::instrument;

use crate::shopify::{CatalogClient, CatalogError, QueryVariant};

/// What the display region shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Display {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last action failed; holds the user-facing message.
    Failed(String),
    /// The last fetch succeeded with zero collections.
    NoCollections,
    /// The collection list (flat titles or nested cards).
    Collections,
    /// The product grid of the collection at this index.
    Products(usize),
}

/// One user's browsing session.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    collections: Vec<Collection>,
    display: Display,
}

impl CatalogSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored collections, in fetch order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The stored collection at `index`.
    #[must_use]
    pub fn collection(&self, index: usize) -> Option<&Collection> {
        self.collections.get(index)
    }

    /// What the display region currently shows.
    #[must_use]
    pub const fn display(&self) -> &Display {
        &self.display
    }

    /// Switch the display region to the loading indicator.
    pub fn begin_load(&mut self) {
        self.display = Display::Loading;
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the stored list. Failure leaves the stored list
    /// untouched and shows only the error message.
    pub fn finish_load(&mut self, result: Result<Vec<Collection>, CatalogError>) {
        match result {
            Ok(collections) if collections.is_empty() => {
                tracing::info!("No collections found");
                self.collections = Vec::new();
                self.display = Display::NoCollections;
            }
            Ok(collections) => {
                tracing::info!(count = collections.len(), "Loaded collections");
                self.collections = collections;
                self.display = Display::Collections;
            }
            Err(e) => {
                tracing::error!(error = %e, detail = ?e, "Error loading collections");
                self.display = Display::Failed(e.display_message());
            }
        }
    }

    /// Go back to the collection list without fetching.
    pub fn show_collections(&mut self) {
        self.display = match self.display {
            Display::Idle | Display::Loading => return,
            _ if self.collections.is_empty() => Display::NoCollections,
            _ => Display::Collections,
        };
    }

    /// Show the product grid for the collection at `index`.
    ///
    /// Returns `false` and shows an error if there is no such collection.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.collections.len() {
            self.display = Display::Products(index);
            true
        } else {
            tracing::warn!(index, count = self.collections.len(), "Collection not found");
            self.display = Display::Failed("Collection not found".to_string());
            false
        }
    }
}

/// Fetch collections through the relay and apply them to `session`.
///
/// This is the whole load cycle for callers that own the session outright.
/// The page server splits it around its lock instead (see `routes`).
#[instrument(skip_all, fields(variant = ?variant))]
pub async fn load_collections(
    client: &CatalogClient,
    session: &mut CatalogSession,
    variant: QueryVariant,
) {
    session.begin_load();
    let result = client.get_collections(variant).await;
    session.finish_load(result);
}
