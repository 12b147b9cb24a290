//! Product descriptor.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable code, the primary key for catalog lookups. Case-sensitive.
    pub code: String,
    /// Human-readable display name.
    pub name: String,
    /// Non-discounted price of one unit. Expected to be non-negative;
    /// the catalog does not reject negative amounts.
    pub unit_price: Money,
}

impl Product {
    /// Create a new product descriptor.
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit_price,
        }
    }
}

// Products are identified by code alone.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("MUG", "Coffee Mug", Money::from_cents(750));
        assert_eq!(product.code, "MUG");
        assert_eq!(product.name, "Coffee Mug");
        assert_eq!(product.unit_price, Money::from_cents(750));
    }

    #[test]
    fn test_equality_is_by_code() {
        let a = Product::new("MUG", "Coffee Mug", Money::from_cents(750));
        let b = Product::new("MUG", "Tea Mug", Money::from_cents(900));
        let c = Product::new("mug", "Coffee Mug", Money::from_cents(750));

        assert_eq!(a, b);
        // Codes are case-sensitive.
        assert_ne!(a, c);
    }
}
