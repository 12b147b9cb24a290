//! The catalog registry: products and their discount rules.

use crate::catalog::Product;
use crate::discount::DiscountRule;
use crate::error::CheckoutError;
use crate::money::Money;
use serde::Serialize;
use std::collections::HashMap;

/// Registry of products and the discount rules attached to them.
///
/// Append-only: products and discounts can be added but never removed or
/// replaced. Every registered discount refers to an existing product.
/// Once construction is done, the catalog is read-only from a session's
/// point of view and can back any number of [`Checkout`](crate::Checkout)
/// sessions at once.
///
/// `Deserialize` is deliberately not derived; construction goes through
/// the validating mutators.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    products: HashMap<String, Product>,
    discounts: HashMap<String, DiscountRule>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert products in order.
    ///
    /// Fails with [`CheckoutError::DuplicateProduct`] on the first repeated
    /// code. Products inserted earlier in the same call are retained, so
    /// partial success is observable.
    pub fn add_products(
        &mut self,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<(), CheckoutError> {
        for product in products {
            if self.products.contains_key(&product.code) {
                return Err(CheckoutError::DuplicateProduct(product.code));
            }
            self.products.insert(product.code.clone(), product);
        }
        Ok(())
    }

    /// Attach a discount rule to a product.
    ///
    /// Fails with [`CheckoutError::UnknownProduct`] if the code is not in
    /// the catalog, [`CheckoutError::DuplicateDiscount`] if a rule is
    /// already registered for it, and
    /// [`CheckoutError::InvalidDiscountParameters`] if the rule fails
    /// validation against the product's unit price.
    pub fn register_discount(
        &mut self,
        code: impl Into<String>,
        rule: DiscountRule,
    ) -> Result<(), CheckoutError> {
        let code = code.into();
        let product = self
            .products
            .get(&code)
            .ok_or_else(|| CheckoutError::UnknownProduct(code.clone()))?;
        if self.discounts.contains_key(&code) {
            return Err(CheckoutError::DuplicateDiscount(code));
        }
        rule.validate(product.unit_price)
            .map_err(|reason| CheckoutError::InvalidDiscountParameters {
                code: code.clone(),
                reason,
            })?;
        self.discounts.insert(code, rule);
        Ok(())
    }

    /// Unit price of a product, or [`CheckoutError::UnknownProduct`].
    pub fn unit_price(&self, code: &str) -> Result<Money, CheckoutError> {
        self.products
            .get(code)
            .map(|p| p.unit_price)
            .ok_or_else(|| CheckoutError::UnknownProduct(code.to_string()))
    }

    /// The discount rule registered for a code, if any.
    ///
    /// Absence is not an error; it means no discount applies.
    pub fn discount_for(&self, code: &str) -> Option<&DiscountRule> {
        self.discounts.get(code)
    }

    /// Look up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Check whether a code names a product in the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over all products. Order is unspecified.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
