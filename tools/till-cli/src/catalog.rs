//! The built-in demo catalog.

use till_checkout::prelude::*;

/// Build the demo catalog the CLI scans against.
///
/// | Code    | Name       | Unit price | Discount           |
/// |---------|------------|-----------:|--------------------|
/// | VOUCHER | Voucher    |       5.00 | buy 2 get 1 free   |
/// | TSHIRT  | T-Shirt    |      20.00 | 3+ at 19.00 each   |
/// | MUG     | Coffee Mug |       7.50 | none               |
pub fn demo_catalog() -> Result<Catalog, CheckoutError> {
    let mut catalog = Catalog::new();
    catalog.add_products([
        Product::new("VOUCHER", "Voucher", Money::from_major(5)),
        Product::new("TSHIRT", "T-Shirt", Money::from_major(20)),
        Product::new("MUG", "Coffee Mug", Money::from_cents(750)),
    ])?;
    catalog.register_discount("VOUCHER", DiscountRule::FreeUnits { buy: 2, free: 1 })?;
    catalog.register_discount(
        "TSHIRT",
        DiscountRule::BulkRepricing {
            threshold: 3,
            new_price: Money::from_major(19),
        },
    )?;
    Ok(catalog)
}
