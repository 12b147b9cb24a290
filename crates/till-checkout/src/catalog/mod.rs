//! Product catalog module.
//!
//! Contains the product descriptor and the append-only registry of
//! products and their discount rules.

mod product;
mod registry;

pub use product::Product;
pub use registry::Catalog;
