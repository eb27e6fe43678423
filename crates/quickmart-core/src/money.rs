//! # Money Module
//!
//! Integer-cent money. Balances, prices and fees never touch floats, so a
//! balance of 800.00 minus a total of 710.00 leaves exactly 90.00.
//!
//! ```rust
//! use quickmart_core::money::Money;
//!
//! let price = Money::from_major(300);
//! assert_eq!((price * 2u32).cents(), 60_000);
//! assert_eq!(price.to_string(), "$300.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A monetary value in cents.
///
/// The plain operators assume values within the bounds enforced by
/// [`validation`](crate::validation). Checkout totals go through the
/// `checked_*` methods instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole currency units, e.g. `from_major(800)` is 800.00.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price × quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// [`Money::multiply_quantity`], or `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }

    /// Addition, or `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

/// `$D.CC`, as printed on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_major(710).to_string(), "$710.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3u32).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running.cents(), 500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [200, 150, 300, 50]
            .into_iter()
            .map(Money::from_major)
            .sum();
        assert_eq!(total, Money::from_major(700));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let half = Money::from_cents(i64::MAX / 2);
        assert_eq!(half.checked_multiply_quantity(3), None);
        assert_eq!(half.checked_add(half + Money::from_cents(2)), None);

        assert_eq!(
            Money::from_major(100).checked_multiply_quantity(2),
            Some(Money::from_major(200))
        );
        assert_eq!(
            Money::from_major(700).checked_add(Money::from_major(10)),
            Some(Money::from_major(710))
        );
    }

    #[test]
    fn test_ordering_for_balance_checks() {
        assert!(Money::from_major(800) >= Money::from_major(710));
        assert!(Money::from_major(90) < Money::from_major(710));
        assert!(Money::from_cents(-1).is_negative());
    }
}
