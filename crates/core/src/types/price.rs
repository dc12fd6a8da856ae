//! Monetary amounts as returned by the Storefront API.
//!
//! Amounts are kept as the decimal strings Shopify sends. They are compared
//! numerically where possible but always displayed exactly as received:
//! no rounding and no currency conversion.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Parse the amount as a decimal, if it is one.
    #[must_use]
    pub fn decimal(&self) -> Option<Decimal> {
        self.amount.trim().parse().ok()
    }

    /// Format for display (e.g., "$19.99 USD").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${} {}", self.amount, self.currency_code)
    }

    /// Whether two amounts are the same price.
    ///
    /// Numeric when both amounts parse as decimals ("19.9" == "19.90"),
    /// otherwise a plain string comparison.
    #[must_use]
    pub fn same_amount(&self, other: &Self) -> bool {
        match (self.decimal(), other.decimal()) {
            (Some(a), Some(b)) => a == b,
            _ => self.amount == other.amount,
        }
    }
}

/// Price range for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Money,
    /// Maximum price among all variants.
    pub max_variant_price: Money,
}

impl PriceRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(min_variant_price: Money, max_variant_price: Money) -> Self {
        Self {
            min_variant_price,
            max_variant_price,
        }
    }

    /// Whether every variant has the same price.
    #[must_use]
    pub fn is_single_price(&self) -> bool {
        self.min_variant_price.same_amount(&self.max_variant_price)
    }

    /// Whether min > max. Only decidable when both amounts are decimals.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        match (
            self.min_variant_price.decimal(),
            self.max_variant_price.decimal(),
        ) {
            (Some(min), Some(max)) => min.cmp(&max) == Ordering::Greater,
            _ => false,
        }
    }

    /// Format for display.
    ///
    /// A single price renders as `"$19.99 USD"`; a range renders as
    /// `"$10.00 - $15.00 USD"` using the minimum price's currency.
    #[must_use]
    pub fn display(&self) -> String {
        if self.is_single_price() {
            return self.min_variant_price.display();
        }

        format!(
            "${} - ${} {}",
            self.min_variant_price.amount,
            self.max_variant_price.amount,
            self.min_variant_price.currency_code
        )
    }
}
