//! Money type for representing monetary values.
//!
//! Amounts are stored as an integer number of cents, which keeps catalog
//! prices, discounts, and basket totals exact. Floating point only enters
//! at the edges, if a caller chooses to convert.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in cents.
///
/// Two fractional digits are assumed throughout; `Display` renders
/// `1050` as `"10.50"`. The currency itself is a concern of the caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use till_checkout::money::Money;
    /// assert_eq!(Money::from_major(20), Money::from_cents(2000));
    /// ```
    pub fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Checked multiplication by a scalar.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0 * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        // Through f.pad so width/alignment specifiers apply.
        f.pad(&format!("{}{}.{:02}", sign, abs / 100, abs % 100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(750);
        assert_eq!(m.cents(), 750);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(5), Money::from_cents(500));
        assert_eq!(Money::from_major(0), Money::ZERO);
    }

    #[test]
    fn test_display_two_digits() {
        assert_eq!(Money::from_cents(3250).to_string(), "32.50");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_display_honors_width_and_alignment() {
        assert_eq!(format!("{:>8}", Money::from_cents(500)), "    5.00");
        assert_eq!(format!("{:<8}|", Money::from_cents(3250)), "32.50   |");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((b * 4).cents(), 1000);
    }

    #[test]
    fn test_checked_mul_overflow() {
        let m = Money::from_cents(i64::MAX);
        assert_eq!(m.checked_mul(2), None);
        assert_eq!(m.checked_mul(1), Some(m));
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_cents(100), Money::from_cents(250)];
        assert_eq!(Money::sum(values.iter()), Money::from_cents(350));
        assert_eq!(Money::sum(std::iter::empty()), Money::ZERO);
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(100) < Money::from_cents(200));
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
    }
}
