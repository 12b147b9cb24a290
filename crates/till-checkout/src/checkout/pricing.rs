//! Pricing breakdown for a checkout session.

use crate::discount::DiscountRule;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutPricing {
    /// Gross amount before discounts.
    pub subtotal: Money,
    /// Total discount amount.
    pub discount_total: Money,
    /// Final total (subtotal - discounts).
    pub grand_total: Money,
    /// Per-product breakdown, ordered by code.
    pub lines: Vec<LinePricing>,
}

impl CheckoutPricing {
    /// Check if any discount applied.
    pub fn has_discounts(&self) -> bool {
        !self.discount_total.is_zero()
    }

    /// The amount saved through discounts.
    pub fn savings(&self) -> Money {
        self.discount_total
    }
}

/// Pricing breakdown for one product code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePricing {
    /// Product code.
    pub code: String,
    /// Product display name.
    pub name: String,
    /// Units scanned.
    pub quantity: u32,
    /// Price of one unit before discount.
    pub unit_price: Money,
    /// Gross amount (quantity * unit price).
    pub gross: Money,
    /// Discount applied to this line.
    pub discount: Money,
    /// The rule that produced the discount, if one is registered.
    pub rule: Option<DiscountRule>,
    /// Final amount for this line.
    pub net: Money,
}
