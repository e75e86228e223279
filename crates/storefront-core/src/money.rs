//! # Money Module
//!
//! Provides the `Money` type for cart prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a cart in floating point:                                      │
//! │    $0.10 + $0.20 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 20 = 30 cents, exactly, for any cart size                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line_total = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(line_total.cents(), 2198);
//! assert_eq!(line_total.to_string(), "$21.98");
//! ```
//!
//! Arithmetic is checked: prices arrive from outside the process, so a sum
//! that does not fit in `i64` is reported as `None` instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A monetary value in the smallest currency unit (cents).
///
/// Serialized as a bare integer so the UI receives `1099`, not an object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero, the total of an empty cart.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Returns `None` if the product does not fit in `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Debug-grade display (`$10.99`). The UI layer formats with the configured
/// currency symbol instead.
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
