//! Checkout error types.

use thiserror::Error;

/// Errors surfaced by catalog construction and scanning.
///
/// All variants are contract violations reported to the caller with the
/// offending product code; nothing is retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A product with this code is already in the catalog.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// The code does not name a product in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// A discount is already registered for this code.
    #[error("Duplicate discount for product: {0}")]
    DuplicateDiscount(String),

    /// Discount parameters failed registration-time validation.
    #[error("Invalid discount parameters for {code}: {reason}")]
    InvalidDiscountParameters { code: String, reason: String },
}

impl CheckoutError {
    /// The product code the error refers to.
    pub fn code(&self) -> &str {
        match self {
            CheckoutError::DuplicateProduct(code)
            | CheckoutError::UnknownProduct(code)
            | CheckoutError::DuplicateDiscount(code) => code,
            CheckoutError::InvalidDiscountParameters { code, .. } => code,
        }
    }
}
