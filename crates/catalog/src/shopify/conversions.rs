//! Wire-to-domain conversion.
//!
//! This is the one place where missing data is interpreted: absent or null
//! `collections`, `products`, `images`, `variants` and `selectedOptions`
//! all become empty sequences, so rendering never has to check for them.

use storefront_relay_core::types::{
    Collection, Image, Money, PriceRange, Product, ProductVariant, SelectedOption,
};

use super::wire::{
    CollectionNode, CollectionsData, Connection, ImageNode, MoneyNode, PriceRangeNode,
    ProductNode, VariantNode,
};

/// Flatten an optional connection into its nodes.
fn nodes<T>(connection: Option<Connection<T>>) -> impl Iterator<Item = T> {
    connection
        .and_then(|c| c.edges)
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.node)
}

/// Convert the `data` of a collections query.
///
/// A missing `data` or `collections` key yields no collections rather than
/// an error, with a diagnostic log.
pub fn convert_collections(data: Option<CollectionsData>) -> Vec<Collection> {
    let Some(connection) = data.and_then(|d| d.collections) else {
        tracing::warn!("No collections data received; treating as empty");
        return Vec::new();
    };

    nodes(Some(connection)).map(convert_collection).collect()
}

fn convert_collection(node: CollectionNode) -> Collection {
    Collection {
        id: node.id.unwrap_or_default(),
        handle: node.handle.unwrap_or_default(),
        title: node.title.unwrap_or_default(),
        description: node.description.unwrap_or_default(),
        image: node.image.map(convert_image),
        products: nodes(node.products).map(convert_product).collect(),
    }
}

fn convert_product(node: ProductNode) -> Product {
    let price_range = convert_price_range(node.price_range);

    if price_range.is_inverted() {
        tracing::warn!(
            product_id = node.id.as_deref().unwrap_or_default(),
            min = %price_range.min_variant_price.amount,
            max = %price_range.max_variant_price.amount,
            "Product price range has min > max"
        );
    }

    Product {
        id: node.id.unwrap_or_default(),
        handle: node.handle.unwrap_or_default(),
        title: node.title.unwrap_or_default(),
        description: node.description.unwrap_or_default(),
        price_range,
        total_inventory: node.total_inventory,
        images: nodes(node.images).map(convert_image).collect(),
        variants: nodes(node.variants).map(convert_variant).collect(),
    }
}

fn convert_variant(node: VariantNode) -> ProductVariant {
    ProductVariant {
        id: node.id.unwrap_or_default(),
        title: node.title.unwrap_or_default(),
        price: convert_money(node.price),
        quantity_available: node.quantity_available,
        selected_options: node
            .selected_options
            .unwrap_or_default()
            .into_iter()
            .map(|o| SelectedOption {
                name: o.name,
                value: o.value,
            })
            .collect(),
    }
}

fn convert_price_range(range: Option<PriceRangeNode>) -> PriceRange {
    let (min, max) = range.map_or((None, None), |r| (r.min_variant_price, r.max_variant_price));
    PriceRange::new(convert_money(min), convert_money(max))
}

/// Missing amounts read as `0.00`; a missing currency stays empty.
fn convert_money(money: Option<MoneyNode>) -> Money {
    let (amount, currency_code) = money.map_or((None, None), |m| (m.amount, m.currency_code));
    Money::new(
        amount.unwrap_or_else(|| "0.00".to_string()),
        currency_code.unwrap_or_default(),
    )
}

fn convert_image(image: ImageNode) -> Image {
    Image {
        url: image.url,
        alt_text: image.alt_text,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::shopify::wire::GraphQLResponse;

    fn decode(json: serde_json::Value) -> Vec<Collection> {
        let response: GraphQLResponse<CollectionsData> = serde_json::from_value(json).unwrap();
        convert_collections(response.data)
    }

    #[test]
    fn test_missing_collections_key_is_empty() {
        assert!(decode(serde_json::json!({ "data": {} })).is_empty());
        assert!(decode(serde_json::json!({ "data": null })).is_empty());
        assert!(decode(serde_json::json!({})).is_empty());
    }

    #[test]
    fn test_empty_edges() {
        let json = serde_json::json!({ "data": { "collections": { "edges": [] } } });
        assert!(decode(json).is_empty());
    }

    #[test]
    fn test_full_product_conversion() {
        let collections = decode(serde_json::json!({
            "data": { "collections": { "edges": [{ "node": {
                "id": "gid://shopify/Collection/1",
                "title": "Snacks",
                "handle": "snacks",
                "description": "Crunchy things",
                "image": { "url": "https://cdn.shopify.com/snacks.jpg", "altText": null },
                "products": { "edges": [{ "node": {
                    "id": "gid://shopify/Product/7",
                    "title": "Pineapple Chips",
                    "handle": "pineapple-chips",
                    "description": "",
                    "totalInventory": 42,
                    "priceRange": {
                        "minVariantPrice": { "amount": "10.00", "currencyCode": "USD" },
                        "maxVariantPrice": { "amount": "15.00", "currencyCode": "USD" }
                    },
                    "images": { "edges": [
                        { "node": { "url": "https://cdn.shopify.com/a.jpg", "altText": "Bag" } },
                        { "node": { "url": "https://cdn.shopify.com/b.jpg", "altText": null } }
                    ] },
                    "variants": { "edges": [{ "node": {
                        "id": "gid://shopify/ProductVariant/70",
                        "title": "Small",
                        "price": { "amount": "10.00", "currencyCode": "USD" },
                        "quantityAvailable": 3,
                        "selectedOptions": [{ "name": "Size", "value": "Small" }]
                    } }] }
                } }] }
            } }] } }
        }));

        assert_eq!(collections.len(), 1);
        let collection = &collections[0];
        assert_eq!(collection.title, "Snacks");
        assert_eq!(collection.image.as_ref().unwrap().alt_text, None);

        let product = &collection.products[0];
        assert_eq!(product.total_inventory, Some(42));
        assert_eq!(product.price_range.display(), "$10.00 - $15.00 USD");
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.first_image().unwrap().alt_text.as_deref(), Some("Bag"));

        let variant = &product.variants[0];
        assert_eq!(variant.quantity_available, Some(3));
        assert_eq!(
            variant.selected_options,
            vec![SelectedOption {
                name: "Size".to_string(),
                value: "Small".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_nested_sequences_are_empty() {
        let collections = decode(serde_json::json!({
            "data": { "collections": { "edges": [
                { "node": { "title": "No products key" } },
                { "node": { "title": "Null products", "products": null } },
                { "node": { "title": "Sparse product", "products": { "edges": [{ "node": {
                    "title": "Bare",
                    "priceRange": {
                        "minVariantPrice": { "amount": "19.99", "currencyCode": "USD" },
                        "maxVariantPrice": { "amount": "19.99", "currencyCode": "USD" }
                    },
                    "images": null,
                    "variants": { "edges": null }
                } }] } } }
            ] } }
        }));

        assert_eq!(collections.len(), 3);
        assert!(collections[0].products.is_empty());
        assert!(collections[1].products.is_empty());

        let product = &collections[2].products[0];
        assert!(product.images.is_empty());
        assert!(product.variants.is_empty());
        assert_eq!(product.total_inventory, None);
        assert_eq!(product.price_range.display(), "$19.99 USD");
    }

    #[test]
    fn test_order_is_preserved() {
        let collections = decode(serde_json::json!({
            "data": { "collections": { "edges": [
                { "node": { "title": "First" } },
                { "node": { "title": "Second" } },
                { "node": { "title": "Third" } }
            ] } }
        }));
        let titles: Vec<_> = collections.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_partial_prices_default_to_zero() {
        let collections = decode(serde_json::json!({
            "data": { "collections": { "edges": [{ "node": {
                "title": "Snacks",
                "products": { "edges": [
                    { "node": {
                        "title": "Null min",
                        "priceRange": {
                            "minVariantPrice": null,
                            "maxVariantPrice": { "amount": "4.50", "currencyCode": "USD" }
                        },
                        "variants": { "edges": [{ "node": {
                            "title": "Default",
                            "price": { "amount": null, "currencyCode": "USD" }
                        } }] }
                    } },
                    { "node": { "title": "No range", "priceRange": null } }
                ] }
            } }] } }
        }));

        let products = &collections[0].products;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price_range.min_variant_price, Money::new("0.00", ""));
        assert_eq!(products[0].price_range.max_variant_price, Money::new("4.50", "USD"));
        assert_eq!(products[0].variants[0].price, Money::new("0.00", "USD"));
        assert!(products[1].price_range.is_single_price());
        assert_eq!(products[1].price_range.max_variant_price, Money::new("0.00", ""));
    }
}
