//! # Money Module
//!
//! Provides the `Money` type (an amount in minor units) and the conversions
//! between minor units and decimal major units.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Ticket prices, fees and refunds are stored and sent as cents.        │
//! │    Major units (10.50) exist only on the way to a display string.      │
//! │                                                                         │
//! │    to_minor(to_major(m)) == m        always (within MAX_SAFE_MINOR)     │
//! │    to_major(to_minor(x)) == x        NOT guaranteed (x is a float)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticketing_core::money::{to_major, to_minor, Money};
//!
//! let price = to_minor(10.50).unwrap();
//! assert_eq!(price, Money::from_cents(1050));
//! assert_eq!(to_major(price), 10.5);
//!
//! assert!(to_minor(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use tracing::trace;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Minor units in one major unit (cents per real/dollar).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Largest magnitude, in minor units, accepted by [`to_minor`].
///
/// 2^51 - 1. Up to this bound every `m` survives `to_minor(to_major(m))`
/// unchanged; above it the f64 division/multiplication can land one cent off.
pub const MAX_SAFE_MINOR: i64 = (1 << 51) - 1;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents, centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds
/// - **Single field tuple struct**: Serializes as a plain JSON integer
/// - **No currency field**: the currency is implied by the display locale
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ticketing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal major amount. See [`to_minor`].
    #[inline]
    pub fn from_major(major: f64) -> CoreResult<Self> {
        to_minor(major)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the decimal major amount. See [`to_major`].
    #[inline]
    pub fn to_major(&self) -> f64 {
        to_major(*self)
    }

    /// Returns the whole major units, without sign.
    ///
    /// ## Example
    /// ```rust
    /// use ticketing_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(123456).major_part(), 1234);
    /// assert_eq!(Money::from_cents(-550).major_part(), 5);
    /// assert_eq!(Money::from_cents(i64::MIN).major_part(), 92233720368547758);
    /// ```
    #[inline]
    pub const fn major_part(&self) -> u64 {
        self.0.unsigned_abs() / MINOR_PER_MAJOR as u64
    }

    /// Returns the minor unit remainder (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use ticketing_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).minor_part(), 99);
    /// assert_eq!(Money::from_cents(-550).minor_part(), 50);
    /// ```
    #[inline]
    pub const fn minor_part(&self) -> u64 {
        self.0.unsigned_abs() % MINOR_PER_MAJOR as u64
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
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// True for refunds and credits.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// Saturates at `i64::MAX` for `i64::MIN`.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Multiplies money by a ticket quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ticketing_core::money::Money;
    ///
    /// let ticket = Money::from_cents(4500);
    /// assert_eq!(ticket.multiply_quantity(3).cents(), 13500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Converts a decimal major amount to minor units.
///
/// Multiplies by 100 and rounds to the nearest cent, **half away from zero**
/// (`0.125 → 13`, `-0.125 → -13`). The rounding applies to the binary
/// product, so a literal like `10.505` (stored as 10.50499…) becomes `1050`.
///
/// ## Errors
/// - [`CoreError::NonFiniteAmount`] for NaN and ±infinity
/// - [`CoreError::AmountOutOfRange`] when the result exceeds ±[`MAX_SAFE_MINOR`]
///
/// ## Example
/// ```rust
/// use ticketing_core::money::to_minor;
///
/// assert_eq!(to_minor(10.50).unwrap().cents(), 1050);
/// assert_eq!(to_minor(0.125).unwrap().cents(), 13);
/// assert_eq!(to_minor(-5.0).unwrap().cents(), -500);
/// ```
pub fn to_minor(major: f64) -> CoreResult<Money> {
    if !major.is_finite() {
        return Err(CoreError::NonFiniteAmount { value: major });
    }

    let scaled = (major * MINOR_PER_MAJOR as f64).round();
    if scaled.abs() > MAX_SAFE_MINOR as f64 {
        return Err(CoreError::AmountOutOfRange { value: major });
    }

    // In range and integral, so the cast is exact (and -0.0 becomes 0)
    let cents = scaled as i64;
    trace!(major, cents, "converted major amount to minor units");
    Ok(Money(cents))
}

/// Converts minor units to a decimal major amount (divides by 100).
///
/// Only f64 representation limits apply; no rounding is added.
///
/// ## Example
/// ```rust
/// use ticketing_core::money::{to_major, Money};
///
/// assert_eq!(to_major(Money::from_cents(1050)), 10.5);
/// assert_eq!(to_major(Money::from_cents(-1)), -0.01);
/// ```
#[inline]
pub fn to_major(minor: Money) -> f64 {
    minor.0 as f64 / MINOR_PER_MAJOR as f64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency-neutral rendering for logs and debugging (`-5.50`).
///
/// Use [`crate::format::format_currency`] for anything a user sees.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part(), self.minor_part())
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Money(cents)
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

/// Negation turns a charge into a refund.
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        assert_eq!(money.major_part(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_to_minor_basic() {
        assert_eq!(to_minor(10.50).unwrap().cents(), 1050);
        assert_eq!(to_minor(0.0).unwrap().cents(), 0);
        assert_eq!(to_minor(-0.0).unwrap().cents(), 0);
        assert_eq!(to_minor(0.01).unwrap().cents(), 1);
        assert_eq!(to_minor(19.99).unwrap().cents(), 1999);
        assert_eq!(to_minor(-5.0).unwrap().cents(), -500);
    }

    #[test]
    fn test_to_minor_rounds_instead_of_truncating() {
        // 0.29 * 100 = 28.999999999999996 in f64
        assert_eq!(to_minor(0.29).unwrap().cents(), 29);
        // 1.15 * 100 = 114.99999999999999
        assert_eq!(to_minor(1.15).unwrap().cents(), 115);
        assert_eq!(to_minor(10.504).unwrap().cents(), 1050);
        assert_eq!(to_minor(10.506).unwrap().cents(), 1051);
    }

    #[test]
    fn test_to_minor_ties_round_away_from_zero() {
        // Exactly representable half-cent values
        assert_eq!(to_minor(0.125).unwrap().cents(), 13);
        assert_eq!(to_minor(0.375).unwrap().cents(), 38);
        assert_eq!(to_minor(-0.125).unwrap().cents(), -13);
        assert_eq!(to_minor(-0.375).unwrap().cents(), -38);
    }

    #[test]
    fn test_to_minor_rejects_non_finite() {
        assert!(matches!(
            to_minor(f64::NAN),
            Err(CoreError::NonFiniteAmount { .. })
        ));
        assert_eq!(
            to_minor(f64::INFINITY),
            Err(CoreError::NonFiniteAmount {
                value: f64::INFINITY
            })
        );
        assert_eq!(
            to_minor(f64::NEG_INFINITY),
            Err(CoreError::NonFiniteAmount {
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn test_to_minor_rejects_out_of_range() {
        assert!(matches!(
            to_minor(f64::MAX),
            Err(CoreError::AmountOutOfRange { .. })
        ));
        assert!(matches!(
            to_minor(-1e17),
            Err(CoreError::AmountOutOfRange { .. })
        ));

        let limit = to_major(Money::from_cents(MAX_SAFE_MINOR));
        assert_eq!(to_minor(limit).unwrap().cents(), MAX_SAFE_MINOR);
        assert_eq!(to_minor(-limit).unwrap().cents(), -MAX_SAFE_MINOR);
    }

    #[test]
    fn test_to_major() {
        assert_eq!(to_major(Money::from_cents(1050)), 10.50);
        assert_eq!(to_major(Money::from_cents(0)), 0.0);
        assert_eq!(to_major(Money::from_cents(-500)), -5.0);
        assert_eq!(Money::from_cents(1).to_major(), 0.01);
    }

    #[test]
    fn test_minor_major_round_trip_small_range() {
        for m in -200_000..=200_000 {
            let money = Money::from_cents(m);
            assert_eq!(to_minor(to_major(money)).unwrap(), money, "cents {m}");
        }
    }

    #[test]
    fn test_minor_major_round_trip_large_values() {
        // Deterministic stride across the whole safe range
        let step = MAX_SAFE_MINOR / 100_003;
        let mut m = -MAX_SAFE_MINOR;
        while m <= MAX_SAFE_MINOR {
            let money = Money::from_cents(m);
            assert_eq!(to_minor(to_major(money)).unwrap(), money, "cents {m}");
            m += step;
        }

        for m in [
            MAX_SAFE_MINOR,
            MAX_SAFE_MINOR - 1,
            -MAX_SAFE_MINOR,
            1_000_000_000_000_07,
            999_999_999_999_99,
        ] {
            let money = Money::from_cents(m);
            assert_eq!(to_minor(to_major(money)).unwrap(), money, "cents {m}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);

        let total: Money = [a, b, -b].into_iter().sum();
        assert_eq!(total, a);

        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(a.checked_sub(b), Some(b));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let refund = Money::from_cents(-100);
        assert!(refund.is_negative());
        assert_eq!(refund.abs().cents(), 100);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "1050");
        let money: Money = serde_json::from_str("-500").unwrap();
        assert_eq!(money, Money::from_cents(-500));
    }
}
