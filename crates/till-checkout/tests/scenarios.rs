//! End-to-end checkout scenarios against the demo catalog.

use till_checkout::prelude::*;

fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_products([
            Product::new("VOUCHER", "Voucher", Money::from_major(5)),
            Product::new("TSHIRT", "T-Shirt", Money::from_major(20)),
            Product::new("MUG", "Coffee Mug", Money::from_cents(750)),
        ])
        .unwrap();
    catalog
        .register_discount("VOUCHER", DiscountRule::FreeUnits { buy: 2, free: 1 })
        .unwrap();
    catalog
        .register_discount(
            "TSHIRT",
            DiscountRule::BulkRepricing {
                threshold: 3,
                new_price: Money::from_major(19),
            },
        )
        .unwrap();
    catalog
}

fn total_for(codes: &[&str]) -> Money {
    let catalog = demo_catalog();
    let mut checkout = Checkout::new(&catalog);
    for code in codes {
        checkout.scan(code).unwrap();
    }
    checkout.total()
}

#[test]
fn empty_basket() {
    assert_eq!(total_for(&[]), Money::ZERO);
}

#[test]
fn single_voucher() {
    assert_eq!(total_for(&["VOUCHER"]), Money::from_cents(500));
}

#[test]
fn two_vouchers_one_free() {
    assert_eq!(
        total_for(&["VOUCHER", "TSHIRT", "VOUCHER"]),
        Money::from_cents(2500)
    );
}

#[test]
fn one_of_each() {
    assert_eq!(
        total_for(&["VOUCHER", "TSHIRT", "MUG"]),
        Money::from_cents(3250)
    );
}

#[test]
fn four_tshirts_repriced() {
    assert_eq!(
        total_for(&["TSHIRT", "TSHIRT", "TSHIRT", "VOUCHER", "TSHIRT"]),
        Money::from_cents(8100)
    );
}

#[test]
fn mixed_basket() {
    assert_eq!(
        total_for(&[
            "VOUCHER", "TSHIRT", "VOUCHER", "VOUCHER", "MUG", "TSHIRT", "TSHIRT"
        ]),
        Money::from_cents(7450)
    );
}

#[test]
fn unknown_code_keeps_prior_scans() {
    let catalog = demo_catalog();
    let mut checkout = Checkout::new(&catalog);
    checkout.scan("VOUCHER").unwrap();

    let err = checkout.scan("FAKE").unwrap_err();
    assert_eq!(err, CheckoutError::UnknownProduct("FAKE".to_string()));

    assert_eq!(checkout.quantity_of("VOUCHER"), 1);
    assert_eq!(checkout.total(), Money::from_cents(500));
}

#[test]
fn free_units_formula_over_a_range() {
    // total for n vouchers = (n - n/2) * 5.00
    let catalog = demo_catalog();
    for n in 0u32..10 {
        let mut checkout = Checkout::new(&catalog);
        for _ in 0..n {
            checkout.scan("VOUCHER").unwrap();
        }
        let paid_units = i64::from(n - n / 2);
        assert_eq!(checkout.total(), Money::from_major(5) * paid_units);
    }
}

#[test]
fn bulk_repricing_formula_over_a_range() {
    // total for n t-shirts = n * 20.00 below the threshold, n * 19.00 at or above
    let catalog = demo_catalog();
    for n in 0u32..10 {
        let mut checkout = Checkout::new(&catalog);
        for _ in 0..n {
            checkout.scan("TSHIRT").unwrap();
        }
        let unit = if n >= 3 {
            Money::from_major(19)
        } else {
            Money::from_major(20)
        };
        assert_eq!(checkout.total(), unit * i64::from(n));
    }
}
