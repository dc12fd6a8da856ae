//! Fixed GraphQL documents sent through the relay.
//!
//! The relay forwards documents opaquely, so queries are plain strings
//! rather than generated types. Page sizes are fixed; there is no
//! pagination beyond the first page.

/// Which collections query to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryVariant {
    /// Titles, prices, one image and up to five variants per product.
    Basic,
    /// Everything in `Basic` plus inventory, five images, ten variants and
    /// selected options.
    #[default]
    Full,
}

impl QueryVariant {
    /// The GraphQL document for this variant.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::Basic => COLLECTIONS_BASIC,
            Self::Full => COLLECTIONS_FULL,
        }
    }

    /// Whether products fetched with this query carry inventory counts.
    #[must_use]
    pub const fn includes_inventory(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl std::str::FromStr for QueryVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown query variant '{other}' (expected basic or full)")),
        }
    }
}

/// Up to 10 collections × 20 products, first image, 5 variants.
pub const COLLECTIONS_BASIC: &str = r"
{
  collections(first: 10) {
    edges {
      node {
        id
        title
        handle
        description
        image {
          url
          altText
        }
        products(first: 20) {
          edges {
            node {
              id
              title
              handle
              description
              priceRange {
                minVariantPrice {
                  amount
                  currencyCode
                }
                maxVariantPrice {
                  amount
                  currencyCode
                }
              }
              images(first: 1) {
                edges {
                  node {
                    url
                    altText
                  }
                }
              }
              variants(first: 5) {
                edges {
                  node {
                    id
                    title
                    price {
                      amount
                      currencyCode
                    }
                    quantityAvailable
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
";

/// Up to 10 collections × 20 products, 5 images, 10 variants, inventory.
pub const COLLECTIONS_FULL: &str = r"
{
  collections(first: 10) {
    edges {
      node {
        id
        title
        handle
        description
        image {
          url
          altText
        }
        products(first: 20) {
          edges {
            node {
              id
              title
              handle
              description
              totalInventory
              priceRange {
                minVariantPrice {
                  amount
                  currencyCode
                }
                maxVariantPrice {
                  amount
                  currencyCode
                }
              }
              images(first: 5) {
                edges {
                  node {
                    url
                    altText
                  }
                }
              }
              variants(first: 10) {
                edges {
                  node {
                    id
                    title
                    price {
                      amount
                      currencyCode
                    }
                    quantityAvailable
                    selectedOptions {
                      name
                      value
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
";

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("basic".parse::<QueryVariant>().unwrap(), QueryVariant::Basic);
        assert_eq!(" FULL ".parse::<QueryVariant>().unwrap(), QueryVariant::Full);
        assert!("everything".parse::<QueryVariant>().is_err());
    }

    #[test]
    fn test_page_sizes() {
        let full = QueryVariant::Full.document();
        assert!(full.contains("collections(first: 10)"));
        assert!(full.contains("products(first: 20)"));
        assert!(full.contains("images(first: 5)"));
        assert!(full.contains("variants(first: 10)"));
        assert!(full.contains("totalInventory"));
        assert!(full.contains("selectedOptions"));

        let basic = QueryVariant::Basic.document();
        assert!(basic.contains("images(first: 1)"));
        assert!(basic.contains("variants(first: 5)"));
        assert!(!basic.contains("totalInventory"));
    }

    #[test]
    fn test_inventory_only_in_full() {
        assert!(QueryVariant::Full.includes_inventory());
        assert!(!QueryVariant::Basic.includes_inventory());
    }
}
