//! Checkout pricing engine.
//!
//! This crate totals a basket of scanned products against a catalog of
//! per-unit prices and optional per-product discount rules:
//!
//! - **Catalog**: append-only registry of products and discount rules
//! - **Discount rules**: free-unit groups and bulk repricing
//! - **Checkout**: a scanning session that produces an exact total
//!
//! # Example
//!
//! ```rust
//! use till_checkout::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_products([
//!     Product::new("VOUCHER", "Voucher", Money::from_major(5)),
//!     Product::new("TSHIRT", "T-Shirt", Money::from_major(20)),
//! ])?;
//! catalog.register_discount("VOUCHER", DiscountRule::FreeUnits { buy: 2, free: 1 })?;
//!
//! let mut checkout = Checkout::new(&catalog);
//! checkout.scan("VOUCHER")?;
//! checkout.scan("TSHIRT")?;
//! checkout.scan("VOUCHER")?;
//!
//! assert_eq!(checkout.total().to_string(), "25.00");
//! # Ok::<(), CheckoutError>(())
//! ```

pub mod catalog;
pub mod checkout;
pub mod discount;
pub mod error;
pub mod money;

pub use catalog::{Catalog, Product};
pub use checkout::{Checkout, CheckoutPricing, LinePricing};
pub use discount::DiscountRule;
pub use error::CheckoutError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, Product};
    pub use crate::checkout::{Checkout, CheckoutPricing, LinePricing};
    pub use crate::discount::DiscountRule;
    pub use crate::error::CheckoutError;
    pub use crate::money::Money;
}
