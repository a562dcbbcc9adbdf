//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  In a markdown pass:                                                │
//! │    $12.50 × 0.765 = $9.5625 → which cent does the customer pay?    │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents + Basis Points                         │
//! │    1250 cents retained at 7650 bps = 956 cents (half-up)           │
//! │    The rounding rule is explicit and the same everywhere            │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::money::Money;
//!
//! // Create from cents (the only constructor)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Ord**: Revenue rankings sort `Money` values directly
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Product.selling_price_cents ──► markdown pass ──► new price        │
/// │                                                                     │
/// │  LineItem.total_cents ──► revenue aggregation ──► ranked reports    │
/// │                                                                     │
/// │  EVERY monetary value in the system flows through this type         │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Scales the amount to a retained fraction expressed in basis points.
    ///
    /// ## Basis Points Explained
    /// 1 basis point = 0.01% = 1/10000. Retaining 7650 bps keeps 76.5%
    /// of the price (a 23.5% markdown); retaining 4310 bps keeps 43.1%.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(cents * bps + 5000) / 10000`.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_cents(10_000);        // $100.00
    /// let marked = price.apply_retention_bps(7_650); // keep 76.5%
    /// assert_eq!(marked.cents(), 7_650);             // $76.50
    /// ```
    pub fn apply_retention_bps(&self, retain_bps: u32) -> Money {
        let retained = (self.0 as i128 * retain_bps as i128 + 5_000) / 10_000;
        Money::from_cents(retained as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$X.YY` (negative as `-$X.YY`).
///
/// Used directly by the table renderers; there is no other display path.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used by revenue accumulation.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_ordering() {
        let small = Money::from_cents(100);
        let large = Money::from_cents(2000);
        assert!(small < large);

        let mut values = vec![large, small];
        values.sort();
        assert_eq!(values, vec![small, large]);
    }

    #[test]
    fn test_retention_bps_markdown_rates() {
        // The two markdown rates used by the near-expiry policy
        let price = Money::from_cents(10_000); // $100.00
        assert_eq!(price.apply_retention_bps(7_650).cents(), 7_650);
        assert_eq!(price.apply_retention_bps(4_310).cents(), 4_310);
    }

    #[test]
    fn test_retention_bps_rounds_half_up() {
        // 1250 × 7650 bps = 956.25 → 956; 1111 × 4310 bps = 478.841 → 479
        assert_eq!(Money::from_cents(1250).apply_retention_bps(7_650).cents(), 956);
        assert_eq!(Money::from_cents(1111).apply_retention_bps(4_310).cents(), 479);

        // Exact half rounds up: 100 × 50 bps = 0.5 → 1
        assert_eq!(Money::from_cents(100).apply_retention_bps(50).cents(), 1);
    }

    #[test]
    fn test_retention_bps_compounds() {
        // Two markdown passes multiply; they never re-derive the original price
        let price = Money::from_cents(10_000);
        let once = price.apply_retention_bps(7_650);
        let twice = once.apply_retention_bps(4_310);
        assert_eq!(twice.cents(), 3_297); // 7650 × 0.431 = 3297.15 → 3297
    }

    #[test]
    fn test_zero_and_abs() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
        assert_eq!(Money::from_cents(-550).abs().cents(), 550);
    }
}
