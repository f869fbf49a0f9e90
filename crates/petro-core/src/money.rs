//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    170.525 is stored as 170.52499999999997726...                        │
//! │    round(170.525, 2) may give 170.52 OR 170.53 depending on luck ❌     │
//! │                                                                         │
//! │  Integer cents do not help either: the coupon stage produces            │
//! │  sub-cent values (179.50 × 0.95 = 170.525) that the rounding stage     │
//! │  must see EXACTLY to truncate or round them correctly.                  │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 decimals (rust_decimal)                          │
//! │    179.50 × 0.9500 = 170.525000 exactly                                 │
//! │    truncate(2) → 170.52, round(2) → 170.53, every time                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use petro_core::money::{Money, PriceFactor};
//!
//! // Create from cents (preferred for literals)
//! let unit = Money::from_cents(359); // R$3.59
//!
//! // Arithmetic operations
//! let line = unit.multiply_quantity(50);          // R$179.50
//! let coupon = line.scale(PriceFactor::from_bps(9500)); // R$170.525
//!
//! assert_eq!(coupon.truncate_dp(2), Money::from_cents(17052));
//! assert_eq!(coupon.round_dp(2), Money::from_cents(17053));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in BRL, backed by an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: a fixed-amount discount may push a very small
///   order below zero; the sign is kept rather than clamped
/// - **No scale normalization**: `Money::from_cents(100) == "1.0".parse()`
///   because decimal equality is numeric
/// - **Serde**: serialized as a decimal string (`"170.52"`)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product::base_price ──► × quantity ──► quantity discount ──► round(2) │
/// │                                                           │             │
/// │                                                           ▼             │
/// │                   final price ◄── rounding policy ◄── coupon           │
/// │                                                                         │
/// │  EVERY monetary value in the pipeline flows through this type          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use petro_core::money::Money;
    ///
    /// let price = Money::from_cents(399); // R$3.99
    /// assert_eq!(price.to_string(), "R$3.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use petro_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(399); // R$3.99
    /// assert_eq!(unit_price.multiply_quantity(500), Money::from_cents(199_500));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies by a price factor, keeping every sub-cent digit.
    ///
    /// ## Example
    /// ```rust
    /// use petro_core::money::{Money, PriceFactor};
    ///
    /// let price = Money::from_cents(10000); // R$100.00
    /// let discounted = price.scale(PriceFactor::from_bps(9000)); // ×0.90
    /// assert_eq!(discounted, Money::from_cents(9000));
    /// ```
    #[inline]
    pub fn scale(&self, factor: PriceFactor) -> Self {
        Money(self.0 * factor.as_decimal())
    }

    /// Rounds to `dp` decimal places, midpoints away from zero.
    ///
    /// This is conventional arithmetic rounding: 1457.996 → 1458.00,
    /// 1457.003 → 1457.00, 0.5 → 1.
    #[inline]
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Truncates toward zero at `dp` decimal places.
    ///
    /// Digits past `dp` are dropped, never rounded up:
    /// 170.525 → 170.52 and 99.999 → 99.99.
    #[inline]
    pub fn truncate_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::ToZero))
    }
}

// =============================================================================
// Price Factor
// =============================================================================

/// A price multiplier in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 9000 bps = ×0.90 (10% off), 9700 bps = ×0.97 (3% off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceFactor(u32);

impl PriceFactor {
    /// Creates a factor from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        PriceFactor(bps)
    }

    /// Returns the factor in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the factor as an exact decimal (9000 → 0.9000).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders the amount with two decimals.
///
/// ## Note
/// Display rounds for presentation only; it never feeds back into pricing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_dp(2).0;
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-R${:.2}", rounded.abs())
        } else {
            write!(f, "R${:.2}", rounded.abs())
        }
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|e| CoreError::InvalidAmount {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Default money is zero.
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

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(399).amount(), Decimal::new(399, 2));
        assert_eq!(Money::from_cents(100), money("1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "R$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "R$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-R$5.50");
        assert_eq!(Money::zero().to_string(), "R$0.00");
        assert_eq!(money("5803.52").to_string(), "R$5803.52");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "abc".parse::<Money>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a.multiply_quantity(3), Money::from_cents(3000));

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_cents(2000));
    }

    #[test]
    fn test_scale_keeps_sub_cent_digits() {
        let price = Money::from_cents(17950);
        let scaled = price.scale(PriceFactor::from_bps(9500));
        assert_eq!(scaled, money("170.525"));
    }

    #[test]
    fn test_round_dp_conventional() {
        assert_eq!(money("1457.003").round_dp(2), money("1457.00"));
        assert_eq!(money("1457.996").round_dp(2), money("1458.00"));
        assert_eq!(money("3878.5").round_dp(0), money("3879"));
        assert_eq!(money("3878.28").round_dp(0), money("3878"));
    }

    #[test]
    fn test_truncate_dp_never_rounds_up() {
        assert_eq!(money("170.525").truncate_dp(2), money("170.52"));
        assert_eq!(money("99.999").truncate_dp(2), money("99.99"));
        assert_eq!(money("95.00").truncate_dp(2), money("95.00"));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_price_factor() {
        let factor = PriceFactor::from_bps(9700);
        assert_eq!(factor.bps(), 9700);
        assert_eq!(factor.as_decimal(), Decimal::new(97, 2));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Money::from_cents(17052)).unwrap();
        assert_eq!(json, "\"170.52\"");

        let back: Money = serde_json::from_str("\"170.525\"").unwrap();
        assert_eq!(back, money("170.525"));
    }
}
