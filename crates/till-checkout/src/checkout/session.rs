//! The scanning session.

use crate::catalog::Catalog;
use crate::checkout::{CheckoutPricing, LinePricing};
use crate::error::CheckoutError;
use crate::money::Money;
use std::collections::HashMap;

/// A checkout session: the running multiset of scanned codes against a
/// fixed catalog.
///
/// The session borrows the catalog read-only, so the catalog outlives the
/// session and one catalog can back many sessions. Items can only be
/// scanned in; nothing removes them. Not safe for concurrent mutation;
/// serialize access externally if shared.
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    catalog: &'a Catalog,
    counts: HashMap<String, u32>,
}

impl<'a> Checkout<'a> {
    /// Start a session against a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            counts: HashMap::new(),
        }
    }

    /// Scan one unit of a product.
    ///
    /// Fails with [`CheckoutError::UnknownProduct`] if the code is not in
    /// the catalog; a failed scan leaves the session unchanged.
    pub fn scan(&mut self, code: &str) -> Result<(), CheckoutError> {
        if !self.catalog.contains(code) {
            return Err(CheckoutError::UnknownProduct(code.to_string()));
        }
        let count = self.counts.entry(code.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        Ok(())
    }

    /// Units scanned for one code so far.
    pub fn quantity_of(&self, code: &str) -> u32 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Total units scanned across all codes.
    pub fn item_count(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of distinct codes scanned.
    pub fn unique_item_count(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Final total for the basket.
    ///
    /// Idempotent and non-mutating; each call reflects the scans made so
    /// far. Discounts are evaluated per code against that code's count
    /// alone.
    pub fn total(&self) -> Money {
        self.pricing().grand_total
    }

    /// Full per-line pricing breakdown, lines ordered by product code.
    pub fn pricing(&self) -> CheckoutPricing {
        let mut lines: Vec<LinePricing> = self
            .counts
            .iter()
            .filter_map(|(code, &quantity)| {
                // scan admits only codes the catalog knows
                let product = self.catalog.product(code)?;
                let gross = product.unit_price * i64::from(quantity);
                let rule = self.catalog.discount_for(code).copied();
                let discount = rule
                    .map(|rule| rule.apply(quantity, product.unit_price))
                    .unwrap_or(Money::ZERO);
                Some(LinePricing {
                    code: code.clone(),
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.unit_price,
                    gross,
                    discount,
                    rule,
                    net: gross - discount,
                })
            })
            .collect();
        lines.sort_by(|a, b| a.code.cmp(&b.code));

        let subtotal = Money::sum(lines.iter().map(|l| &l.gross));
        let discount_total = Money::sum(lines.iter().map(|l| &l.discount));
        CheckoutPricing {
            subtotal,
            discount_total,
            grand_total: subtotal - discount_total,
            lines,
        }
    }
}
