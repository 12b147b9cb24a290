//! Checkout session module.
//!
//! Contains the scanning session and its pricing breakdown.

mod pricing;
mod session;

pub use pricing::{CheckoutPricing, LinePricing};
pub use session::Checkout;
