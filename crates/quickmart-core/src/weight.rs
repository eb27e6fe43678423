//! # Weight
//!
//! Shipping weight in grams. Unlike [`Money`](crate::money::Money), weight is
//! only ever reported, never settled, so a float is acceptable here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative weight measured in grams.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Weight(f64);

impl Weight {
    /// Creates a weight from grams. Negative or non-finite input clamps to zero.
    pub fn from_grams(grams: f64) -> Self {
        if grams.is_finite() && grams > 0.0 {
            Weight(grams)
        } else {
            Weight(0.0)
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Weight(0.0)
    }

    #[inline]
    pub const fn grams(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilograms(&self) -> f64 {
        self.0 / 1000.0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Weight of `qty` units.
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Weight(self.0 * f64::from(qty))
    }

    /// Kilograms as printed on the notice's aggregate line: `10.0kg`,
    /// `27.5kg`, `0.0003kg`. Always keeps a decimal point, and never rounds
    /// a positive weight down to zero.
    pub fn kilograms_label(&self) -> String {
        let mut kg = significant(self.kilograms());
        if !kg.contains(['.', 'e']) {
            kg.push_str(".0");
        }
        format!("{kg}kg")
    }
}

/// Number of significant digits shown for weights.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Renders `value` with at most [`SIGNIFICANT_DIGITS`] significant digits
/// and no trailing zeros, so float noise such as `0.30000000000000004`
/// prints as `0.3`. Very small values switch to exponent form (`3e-7`).
fn significant(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 {
        let digits = (SIGNIFICANT_DIGITS - 1) as usize;
        let formatted = format!("{value:.digits$e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_fraction(mantissa)),
            None => formatted,
        };
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Shows grams the way the shipment notice prints them: `10000g`, `700.5g`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", significant(self.0))
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}
