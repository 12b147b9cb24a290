//! Per-product discount rules.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discount rule attached to a single product code.
///
/// Rules are pure value objects: [`DiscountRule::apply`] is deterministic,
/// keeps no state between calls, and never looks beyond the one product it
/// is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountRule {
    /// Every completed group of `buy` units earns one unit free.
    ///
    /// The `free` field describes the promotion for display; the evaluated
    /// discount is always one unit's price per completed group.
    FreeUnits { buy: u32, free: u32 },
    /// Once the basket holds at least `threshold` units, every unit is
    /// repriced to `new_price` (not only the units past the threshold).
    BulkRepricing { threshold: u32, new_price: Money },
}

impl DiscountRule {
    /// Calculate the total discount for `quantity` units at `unit_price`.
    ///
    /// The result is non-negative and never exceeds the gross amount
    /// `quantity * unit_price`. No rounding happens here; display-time
    /// rounding is the caller's concern.
    pub fn apply(&self, quantity: u32, unit_price: Money) -> Money {
        let gross = unit_price * i64::from(quantity);
        if gross.is_negative() {
            return Money::ZERO;
        }
        let discount = match *self {
            DiscountRule::FreeUnits { buy, .. } => {
                let groups = quantity.checked_div(buy).unwrap_or(0);
                unit_price * i64::from(groups)
            }
            DiscountRule::BulkRepricing {
                threshold,
                new_price,
            } => {
                if quantity < threshold {
                    Money::ZERO
                } else {
                    (unit_price - new_price) * i64::from(quantity)
                }
            }
        };
        discount.clamp(Money::ZERO, gross)
    }

    /// Validate rule parameters against the product's unit price.
    ///
    /// Called at registration time; returns the rejection reason.
    pub(crate) fn validate(&self, unit_price: Money) -> Result<(), String> {
        match *self {
            DiscountRule::FreeUnits { buy, .. } => {
                if buy == 0 {
                    return Err("group size must be at least 1".to_string());
                }
            }
            DiscountRule::BulkRepricing {
                threshold,
                new_price,
            } => {
                if threshold == 0 {
                    return Err("threshold must be at least 1".to_string());
                }
                if new_price.is_negative() {
                    return Err("new price must not be negative".to_string());
                }
                if new_price > unit_price {
                    return Err(format!(
                        "new price {new_price} exceeds unit price {unit_price}"
                    ));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DiscountRule::FreeUnits { buy, free } => {
                write!(f, "buy {buy} get {free} free")
            }
            DiscountRule::BulkRepricing {
                threshold,
                new_price,
            } => {
                write!(f, "{threshold}+ at {new_price} each")
            }
        }
    }
}
