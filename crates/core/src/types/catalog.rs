//! Collection, product, variant and image snapshots.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! edge/node shapes of the Storefront GraphQL response. Sequences are
//! always present: missing data on the wire has already been normalized
//! to an empty `Vec` by the time one of these is built.

use serde::{Deserialize, Serialize};

use super::price::{Money, PriceRange};

/// Product or collection image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "Large", "Blue").
    pub value: String,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// Current price.
    pub price: Money,
    /// Quantity available (if inventory tracking enabled and requested).
    pub quantity_available: Option<i64>,
    /// Selected options for this variant.
    pub selected_options: Vec<SelectedOption>,
}

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Price range across variants.
    pub price_range: PriceRange,
    /// Total inventory across variants (only when requested).
    pub total_inventory: Option<i64>,
    /// Product images, in display order.
    pub images: Vec<Image>,
    /// Product variants, in display order.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The image shown on product cards.
    #[must_use]
    pub fn first_image(&self) -> Option<&Image> {
        self.images.first()
    }
}

/// A collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Collection title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Collection image.
    pub image: Option<Image>,
    /// Products in this collection, in display order.
    pub products: Vec<Product>,
}
