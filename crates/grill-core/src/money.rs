//! # Money Module
//!
//! Provides the `Money` type for prices, totals and fees.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    28.9 * 2 + 16.9 = 74.69999999999999  ❌                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    2890 * 2 + 1690 = 7470  →  "R$ 74,70"  ✅                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grill_core::money::Money;
//!
//! let price = Money::from_cents(2890); // R$ 28,90
//! let line = price * 2;
//! assert_eq!(line.to_string(), "R$ 57,80");
//! assert_eq!(line.decimal(), "57.80");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a real).
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartItem line total ──► Cart.total ──► checkout message
///                                     │
/// Order.total (snapshot) ─────────────┴──► dashboard revenue
/// StoreSettings.delivery_fee
/// ```
///
/// Serialized as a bare integer of centavos.
///
/// Arithmetic saturates at the `i64` bounds instead of overflowing. Amounts
/// that come from user input are capped well below that by
/// [`crate::validation::MAX_PRICE`] and [`crate::validation::MAX_CART_QUANTITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole reais and centavos.
    ///
    /// ```rust
    /// use grill_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(28, 90).cents(), 2890);
    /// assert_eq!(Money::from_reais(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_reais(reais: i64, centavos: i64) -> Self {
        if reais < 0 {
            Money(reais * 100 - centavos)
        } else {
            Money(reais * 100 + centavos)
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating on overflow.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Renders the amount with a dot separator and no currency symbol.
    ///
    /// Admin listings and price form fields use this shape (`"28.90"`).
    pub fn decimal(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.reais().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Brazilian display format: `R$ 74,70`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            self.reais().abs(),
            self.cents_part()
        )
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2890);
        assert_eq!(money.cents(), 2890);
        assert_eq!(money.reais(), 28);
        assert_eq!(money.cents_part(), 90);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(7470).to_string(), "R$ 74,70");
        assert_eq!(Money::from_cents(690).to_string(), "R$ 6,90");
        assert_eq!(Money::from_cents(5).to_string(), "R$ 0,05");
        assert_eq!(Money::from_cents(-550).to_string(), "-R$ 5,50");
        assert_eq!(Money::zero().to_string(), "R$ 0,00");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(Money::from_cents(7470).decimal(), "74.70");
        assert_eq!(Money::from_cents(1000).decimal(), "10.00");
        assert_eq!(Money::from_cents(-105).decimal(), "-1.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2890);
        let b = Money::from_cents(1690);

        assert_eq!((a * 2 + b).cents(), 7470);
        assert_eq!((a - b).cents(), 1200);

        let mut running = Money::zero();
        running += a;
        assert_eq!(running, a);
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        // 28.9 * 2 + 16.9 in floating point is 74.69999999999999
        let lines = [Money::from_cents(2890), Money::from_cents(2890), Money::from_cents(1690)];
        let total: Money = lines.iter().sum();
        assert_eq!(total, Money::from_reais(74, 70));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);

        assert_eq!((huge * 3).cents(), i64::MAX);
        assert_eq!((huge + huge + huge).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));

        let total: Money = [huge, huge, huge].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(690)).unwrap();
        assert_eq!(json, "690");
        let back: Money = serde_json::from_str("690").unwrap();
        assert_eq!(back.cents(), 690);
    }
}
