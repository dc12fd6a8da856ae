//! Catalog types for the storefront relay.
//!
//! Every value here is an immutable snapshot from a single fetch. A new
//! fetch replaces the whole set; nothing is mutated in place.

pub mod catalog;
pub mod price;

pub use catalog::{Collection, Image, Product, ProductVariant, SelectedOption};
pub use price::{Money, PriceRange};
