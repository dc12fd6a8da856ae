//! Integration tests for the storefront relay and catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storefront-relay-integration-tests
//! ```
//!
//! Both servers run in-process on ephemeral ports; Shopify is replaced by a
//! `wiremock` server, so no credentials or network access are needed.
//!
//! # Test Categories
//!
//! - `relay_contract` - The relay's HTTP contract over real sockets
//! - `relay_catalog` - Catalog page loading through a live relay

use std::net::SocketAddr;

use axum::Router;
use secrecy::SecretString;
use storefront_catalog::{CatalogConfig, QueryVariant, RenderMode};
use storefront_relay::RelayConfig;
use storefront_relay::config::ShopifyRelayConfig;

/// Access token the test relay is configured with.
pub const TEST_TOKEN: &str = "shpat-integration-0000";

/// Serve `app` on an ephemeral localhost port and return its address.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    addr
}

/// Relay configuration forwarding to `upstream`.
///
/// With `configured == false` the store name and token are left unset.
///
/// # Panics
///
/// Panics if the loopback address fails to parse.
#[must_use]
pub fn relay_config(upstream: &str, configured: bool) -> RelayConfig {
    RelayConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        shopify: ShopifyRelayConfig {
            store: configured.then(|| "pineapple".to_string()),
            access_token: configured.then(|| SecretString::from(TEST_TOKEN)),
            domain: "myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            endpoint_override: Some(upstream.to_string()),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Start a relay forwarding to `upstream` and return its endpoint URL.
pub async fn spawn_relay(upstream: &str, configured: bool) -> String {
    let state = storefront_relay::AppState::new(relay_config(upstream, configured));
    let addr = spawn(storefront_relay::app(state)).await;
    format!("http://{addr}{}", storefront_relay::RELAY_PATH)
}

/// Catalog configuration pointing at `relay_url`.
///
/// # Panics
///
/// Panics if the loopback address fails to parse.
#[must_use]
pub fn catalog_config(relay_url: &str, render_mode: RenderMode) -> CatalogConfig {
    CatalogConfig {
        host: "127.0.0.1".parse().expect("valid address"),
        port: 0,
        relay_url: relay_url.to_string(),
        render_mode,
        query: QueryVariant::Full,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Start a catalog page server using `relay_url` and return its base URL.
pub async fn spawn_catalog(relay_url: &str, render_mode: RenderMode) -> String {
    let state = storefront_catalog::AppState::new(catalog_config(relay_url, render_mode));
    let addr = spawn(storefront_catalog::app(state)).await;
    format!("http://{addr}")
}

/// A Storefront API response with one collection holding one product.
#[must_use]
pub fn sample_collections() -> serde_json::Value {
    serde_json::json!({
        "data": { "collections": { "edges": [
            { "node": {
                "id": "gid://shopify/Collection/1",
                "title": "Snacks",
                "handle": "snacks",
                "description": "Crunchy things",
                "image": null,
                "products": { "edges": [
                    { "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Pineapple Chips",
                        "handle": "pineapple-chips",
                        "description": "Dried pineapple",
                        "totalInventory": 12,
                        "priceRange": {
                            "minVariantPrice": { "amount": "10.00", "currencyCode": "USD" },
                            "maxVariantPrice": { "amount": "15.00", "currencyCode": "USD" }
                        },
                        "images": { "edges": [
                            { "node": { "url": "https://cdn.shopify.com/chips.jpg", "altText": null } }
                        ] },
                        "variants": { "edges": [
                            { "node": {
                                "id": "gid://shopify/ProductVariant/1",
                                "title": "Small",
                                "price": { "amount": "10.00", "currencyCode": "USD" },
                                "quantityAvailable": 5,
                                "selectedOptions": [{ "name": "Size", "value": "Small" }]
                            } },
                            { "node": {
                                "id": "gid://shopify/ProductVariant/2",
                                "title": "Large",
                                "price": { "amount": "15.00", "currencyCode": "USD" },
                                "quantityAvailable": null,
                                "selectedOptions": null
                            } }
                        ] }
                    } }
                ] }
            } }
        ] } }
    })
}
