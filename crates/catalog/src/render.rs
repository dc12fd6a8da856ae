//! Display-region rendering.
//!
//! Rendering is a pure function of the session and the render options:
//! nothing here fetches or mutates. Both render modes share the same
//! per-product view, so a product card looks identical whether it sits in a
//! drill-down grid or inline in a nested collection card.

use askama::Template;
use storefront_relay_core::types::{Collection, Image, Product, ProductVariant};

use crate::session::{CatalogSession, Display};

/// Placeholder for empty descriptions.
pub const NO_DESCRIPTION: &str = "No description";

/// How the collection list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Clickable titles; selecting one shows its product grid.
    #[default]
    Drilldown,
    /// Every collection as a card with its products inline.
    Nested,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drilldown" | "flat" => Ok(Self::Drilldown),
            "nested" => Ok(Self::Nested),
            other => Err(format!(
                "unknown render mode '{other}' (expected drilldown or nested)"
            )),
        }
    }
}

/// Options that shape rendering but not data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Flat-with-drilldown or nested.
    pub mode: RenderMode,
    /// Show the "Stock: N units" line on product cards.
    pub show_inventory: bool,
}

// =============================================================================
// Views
// =============================================================================

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

impl ImageView {
    /// Build from an image, falling back to `fallback_alt` when it has none.
    fn new(image: &Image, fallback_alt: &str) -> Self {
        Self {
            url: image.url.clone(),
            alt: image
                .alt_text
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| fallback_alt.to_string()),
        }
    }
}

/// Variant display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantView {
    /// `"<title> - <amount> (<quantity> available)"`
    pub summary: String,
    /// `"Size: Small, Color: Red"`, empty when there are no options.
    pub options: String,
}

impl From<&ProductVariant> for VariantView {
    fn from(variant: &ProductVariant) -> Self {
        Self {
            summary: format!(
                "{} - {} ({} available)",
                variant.title,
                variant.price.amount,
                variant.quantity_available.unwrap_or(0)
            ),
            options: variant
                .selected_options
                .iter()
                .map(|o| format!("{}: {}", o.name, o.value))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Product display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub title: String,
    pub description: String,
    pub price: String,
    pub stock: Option<String>,
    pub image: Option<ImageView>,
    pub variants: Vec<VariantView>,
}

impl ProductView {
    /// Build the card for one product.
    #[must_use]
    pub fn new(product: &Product, show_inventory: bool) -> Self {
        Self {
            title: product.title.clone(),
            description: or_placeholder(&product.description),
            price: product.price_range.display(),
            stock: show_inventory
                .then(|| format!("Stock: {} units", product.total_inventory.unwrap_or(0))),
            image: product
                .first_image()
                .map(|image| ImageView::new(image, &product.title)),
            variants: product.variants.iter().map(VariantView::from).collect(),
        }
    }
}

/// Collection title entry in the drill-down list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLinkView {
    pub index: usize,
    pub title: String,
}

/// Collection display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView {
    pub title: String,
    pub description: String,
    pub image: Option<ImageView>,
    pub products: Vec<ProductView>,
}

impl CollectionView {
    /// Build the card for one collection and its products.
    #[must_use]
    pub fn new(collection: &Collection, show_inventory: bool) -> Self {
        Self {
            title: collection.title.clone(),
            description: or_placeholder(&collection.description),
            image: collection
                .image
                .as_ref()
                .map(|image| ImageView::new(image, &collection.title)),
            products: collection
                .products
                .iter()
                .map(|p| ProductView::new(p, show_inventory))
                .collect(),
        }
    }
}

fn or_placeholder(text: &str) -> String {
    if text.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        text.to_string()
    }
}

// =============================================================================
// Templates
// =============================================================================

/// A single status line (idle, loading, error, empty).
#[derive(Template)]
#[template(path = "partials/message.html")]
pub struct MessageTemplate {
    pub class: &'static str,
    pub text: String,
}

/// Drill-down list of collection titles.
#[derive(Template)]
#[template(path = "partials/collection_list.html")]
pub struct CollectionListTemplate {
    pub collections: Vec<CollectionLinkView>,
}

/// One collection's product grid with a back control.
#[derive(Template)]
#[template(path = "partials/collection_products.html")]
pub struct CollectionProductsTemplate {
    pub collection: CollectionView,
}

/// Every collection as a card with inline products.
#[derive(Template)]
#[template(path = "partials/nested_collections.html")]
pub struct NestedCollectionsTemplate {
    pub collections: Vec<CollectionView>,
}

/// Render the display region for the session's current state.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render_display(
    session: &CatalogSession,
    options: &RenderOptions,
) -> Result<String, askama::Error> {
    match session.display() {
        Display::Idle => message("hint", "Click \"Load collections\" to browse the catalog"),
        Display::Loading => render_loading(),
        Display::Failed(text) => message("error", &format!("Error: {text}")),
        Display::NoCollections => message("error", "No collections found"),
        Display::Collections => render_collections(session.collections(), options),
        Display::Products(index) => match session.collection(*index) {
            Some(collection) => render_collection_products(collection, options),
            None => message("error", "Error: Collection not found"),
        },
    }
}

/// Render the loading indicator.
///
/// The page embeds this so it can show it in the display region as soon as
/// a load is requested, before the relay answers.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_loading() -> Result<String, askama::Error> {
    message("loading", "Loading collections...")
}

/// Render the collection list in the configured mode.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render_collections(
    collections: &[Collection],
    options: &RenderOptions,
) -> Result<String, askama::Error> {
    if collections.is_empty() {
        return message("error", "No collections found");
    }

    match options.mode {
        RenderMode::Drilldown => CollectionListTemplate {
            collections: collections
                .iter()
                .enumerate()
                .map(|(index, c)| CollectionLinkView {
                    index,
                    title: c.title.clone(),
                })
                .collect(),
        }
        .render(),
        RenderMode::Nested => NestedCollectionsTemplate {
            collections: collections
                .iter()
                .map(|c| CollectionView::new(c, options.show_inventory))
                .collect(),
        }
        .render(),
    }
}

/// Render one collection's product grid.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render_collection_products(
    collection: &Collection,
    options: &RenderOptions,
) -> Result<String, askama::Error> {
    CollectionProductsTemplate {
        collection: CollectionView::new(collection, options.show_inventory),
    }
    .render()
}

fn message(class: &'static str, text: &str) -> Result<String, askama::Error> {
    MessageTemplate {
        class,
        text: text.to_string(),
    }
    .render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storefront_relay_core::types::{Money, PriceRange, SelectedOption};

    use super::*;

    fn product(min: &str, max: &str) -> Product {
        Product {
            id: "gid://shopify/Product/1".to_string(),
            handle: "pineapple-chips".to_string(),
            title: "Pineapple Chips".to_string(),
            description: String::new(),
            price_range: PriceRange::new(Money::new(min, "USD"), Money::new(max, "USD")),
            total_inventory: None,
            images: vec![],
            variants: vec![],
        }
    }

    fn collection(title: &str, products: Vec<Product>) -> Collection {
        Collection {
            id: "gid://shopify/Collection/1".to_string(),
            handle: "snacks".to_string(),
            title: title.to_string(),
            description: String::new(),
            image: None,
            products,
        }
    }

    fn session_with(collections: Vec<Collection>) -> CatalogSession {
        let mut session = CatalogSession::new();
        session.finish_load(Ok(collections));
        session
    }

    const DRILLDOWN: RenderOptions = RenderOptions {
        mode: RenderMode::Drilldown,
        show_inventory: true,
    };

    const NESTED: RenderOptions = RenderOptions {
        mode: RenderMode::Nested,
        show_inventory: false,
    };

    #[test]
    fn test_render_mode_parsing() {
        assert_eq!("nested".parse::<RenderMode>().unwrap(), RenderMode::Nested);
        assert_eq!("flat".parse::<RenderMode>().unwrap(), RenderMode::Drilldown);
        assert!("grid".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_product_view_prices() {
        assert_eq!(ProductView::new(&product("19.99", "19.99"), false).price, "$19.99 USD");
        assert_eq!(
            ProductView::new(&product("10.00", "15.00"), false).price,
            "$10.00 - $15.00 USD"
        );
    }

    #[test]
    fn test_product_view_defaults() {
        let view = ProductView::new(&product("1.00", "1.00"), false);
        assert_eq!(view.description, "No description");
        assert!(view.image.is_none());
        assert!(view.variants.is_empty());
        assert!(view.stock.is_none());
    }

    #[test]
    fn test_product_view_inventory() {
        let mut p = product("1.00", "1.00");
        assert_eq!(
            ProductView::new(&p, true).stock.as_deref(),
            Some("Stock: 0 units")
        );

        p.total_inventory = Some(12);
        assert_eq!(
            ProductView::new(&p, true).stock.as_deref(),
            Some("Stock: 12 units")
        );
    }

    #[test]
    fn test_product_view_image_alt_fallback() {
        let mut p = product("1.00", "1.00");
        p.images = vec![
            Image {
                url: "https://cdn.shopify.com/a.jpg".to_string(),
                alt_text: None,
            },
            Image {
                url: "https://cdn.shopify.com/b.jpg".to_string(),
                alt_text: Some("Second".to_string()),
            },
        ];

        let image = ProductView::new(&p, false).image.unwrap();
        assert_eq!(image.url, "https://cdn.shopify.com/a.jpg");
        assert_eq!(image.alt, "Pineapple Chips");
    }

    #[test]
    fn test_variant_view() {
        let variant = ProductVariant {
            id: "gid://shopify/ProductVariant/1".to_string(),
            title: "Small".to_string(),
            price: Money::new("10.00", "USD"),
            quantity_available: Some(3),
            selected_options: vec![
                SelectedOption {
                    name: "Size".to_string(),
                    value: "Small".to_string(),
                },
                SelectedOption {
                    name: "Flavor".to_string(),
                    value: "Original".to_string(),
                },
            ],
        };

        let view = VariantView::from(&variant);
        assert_eq!(view.summary, "Small - 10.00 (3 available)");
        assert_eq!(view.options, "Size: Small, Flavor: Original");

        let unknown_stock = ProductVariant {
            quantity_available: None,
            ..variant
        };
        assert_eq!(
            VariantView::from(&unknown_stock).summary,
            "Small - 10.00 (0 available)"
        );
    }

    #[test]
    fn test_idle_and_loading() {
        let mut session = CatalogSession::new();
        assert!(render_display(&session, &DRILLDOWN).unwrap().contains("Load collections"));

        session.begin_load();
        assert!(
            render_display(&session, &DRILLDOWN)
                .unwrap()
                .contains("Loading collections...")
        );
    }

    #[test]
    fn test_no_collections_found() {
        let session = session_with(vec![]);
        let html = render_display(&session, &DRILLDOWN).unwrap();
        assert!(html.contains("No collections found"));
    }

    #[test]
    fn test_error_message() {
        let mut session = CatalogSession::new();
        session.finish_load(Err(crate::shopify::CatalogError::Relay {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "Missing configuration: SHOPIFY_STORE".to_string(),
        }));

        let html = render_display(&session, &DRILLDOWN).unwrap();
        assert!(html.contains("Error: Missing configuration: SHOPIFY_STORE"));
        assert!(!html.contains("collections-grid"));
    }

    #[test]
    fn test_drilldown_list_and_products() {
        let mut session = session_with(vec![
            collection("Snacks", vec![product("19.99", "19.99")]),
            collection("Drinks", vec![]),
        ]);

        let list = render_display(&session, &DRILLDOWN).unwrap();
        assert!(list.contains("Snacks"));
        assert!(list.contains("/collections/1"));
        // Titles only; no product cards in the flat list
        assert!(!list.contains("$19.99 USD"));

        session.select(0);
        let grid = render_display(&session, &DRILLDOWN).unwrap();
        assert!(grid.contains("$19.99 USD"));
        assert!(grid.contains("Stock: 0 units"));
        assert!(grid.contains("Back to collections"));
        assert!(grid.contains("No image"));
    }

    #[test]
    fn test_empty_collection_shows_message() {
        let mut session = session_with(vec![collection("Drinks", vec![])]);
        session.select(0);

        let html = render_display(&session, &DRILLDOWN).unwrap();
        assert!(html.contains("No products in this collection"));
    }

    #[test]
    fn test_nested_render() {
        let session = session_with(vec![
            collection("Snacks", vec![product("10.00", "15.00")]),
            collection("Drinks", vec![]),
        ]);

        let html = render_display(&session, &NESTED).unwrap();
        assert!(html.contains("Snacks"));
        assert!(html.contains("Drinks"));
        assert!(html.contains("No description"));
        assert!(html.contains("$10.00 - $15.00 USD"));
        assert!(html.contains("No products in this collection"));
        assert!(!html.contains("Stock:"));
    }

    #[test]
    fn test_nested_collection_card_image() {
        let mut pictured = collection("Pictured", vec![]);
        pictured.image = Some(Image {
            url: "https://cdn.shopify.com/snacks.jpg".to_string(),
            alt_text: None,
        });

        let html = render_collections(&[pictured], &NESTED).unwrap();
        assert!(html.contains("src=\"https://cdn.shopify.com/snacks.jpg\""));
        assert!(html.contains("alt=\"Pictured\""));
        assert!(!html.contains("No image"));

        let html = render_collections(&[collection("Imageless", vec![])], &NESTED).unwrap();
        assert!(html.contains("<div class=\"image-placeholder\">No image</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_variants_list_only_when_present() {
        let mut with_variants = product("10.00", "10.00");
        with_variants.variants = vec![ProductVariant {
            id: "gid://shopify/ProductVariant/1".to_string(),
            title: "Large".to_string(),
            price: Money::new("10.00", "USD"),
            quantity_available: Some(7),
            selected_options: vec![],
        }];

        let html = render_collection_products(
            &collection("Snacks", vec![with_variants]),
            &DRILLDOWN,
        )
        .unwrap();
        assert!(html.contains("<ul class=\"variants\">"));
        assert!(html.contains("Large - 10.00 (7 available)"));

        let html =
            render_collection_products(&collection("Snacks", vec![product("1", "1")]), &DRILLDOWN)
                .unwrap();
        assert!(!html.contains("<ul class=\"variants\">"));
    }

    #[test]
    fn test_text_is_escaped() {
        let session = session_with(vec![collection("<script>alert(1)</script>", vec![])]);
        let html = render_display(&session, &DRILLDOWN).unwrap();
        assert!(!html.contains("<script>"));
    }
}
