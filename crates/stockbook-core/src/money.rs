//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    ₹10.00 / 3 = ₹3.33 (×3 = ₹9.99)  → Lost ₹0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    1000 paise / 3 = 333 paise (×3 = 999 paise)                         │
//! │    We KNOW we lost 1 paisa, and handle it explicitly                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(109_900); // ₹1099.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₹2198.00
//! let total = price + Money::from_paise(5000);   // ₹1149.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(1099.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Percent;

/// Paise per rupee. Invoice totals round up to whole multiples of this.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for intermediate arithmetic
///   (deltas, rounding differences)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  VariantSize.selling_price ──► LineItem.unit_price ──► line_total      │
/// │                                                                         │
/// │  subtotal ──► Discounts ──► Taxable ──► GST ──► Rounding ──► Total     │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_rupees(1000); // ₹1000.00
    /// assert_eq!(price.paise(), 100_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_paise(1099);
    /// assert_eq!(price.rupees(), 10);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Clamps the value into `[lo, hi]`.
    ///
    /// Used by the totals calculator to keep discount amounts inside
    /// `[0, remaining amount]` - inputs are clamped, never rejected.
    #[inline]
    pub fn clamp(&self, lo: Money, hi: Money) -> Money {
        Money(self.0.clamp(lo.0, hi.0))
    }

    /// Calculates a percentage of this amount, rounding half up.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    /// use stockbook_core::types::Percent;
    ///
    /// let taxable = Money::from_paise(89_500);  // ₹895.00
    /// let igst = Percent::from_bps(1800);       // 18%
    ///
    /// // ₹895.00 × 18% = ₹161.10 (16110 paise)
    /// assert_eq!(taxable.percent_of(igst).paise(), 16_110);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Taxable Amount: ₹895.00
    ///      │
    ///      ▼
    /// percent_of(18%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// IGST: ₹161.10
    /// ```
    pub fn percent_of(&self, rate: Percent) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 1800 = 18.00%
        let part = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(part as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    /// use stockbook_core::types::Percent;
    ///
    /// let line = Money::from_paise(10_000); // ₹100.00
    /// let discounted = line.apply_percent_discount(Percent::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.paise(), 9_000); // ₹90.00
    /// ```
    pub fn apply_percent_discount(&self, discount: Percent) -> Money {
        *self - self.percent_of(discount)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(29_900); // ₹299.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.paise(), 89_700); // ₹897.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Rounds UP to the next whole rupee.
    ///
    /// ## Business Rule
    /// Invoice grand totals are always whole-rupee amounts. The difference
    /// is reported separately as "rounding off" and is always in `[0, ₹1)`.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let raw = Money::from_paise(105_610); // ₹1056.10
    /// assert_eq!(raw.ceil_to_rupee().paise(), 105_700); // ₹1057.00
    ///
    /// let exact = Money::from_paise(105_700);
    /// assert_eq!(exact.ceil_to_rupee().paise(), 105_700); // unchanged
    /// ```
    pub const fn ceil_to_rupee(&self) -> Money {
        // div_euclid floors toward negative infinity, which makes the
        // ceiling correct for negative intermediates as well
        let floor_rupees = self.0.div_euclid(PAISE_PER_RUPEE);
        if self.0 == floor_rupees * PAISE_PER_RUPEE {
            Money(self.0)
        } else {
            Money((floor_rupees + 1) * PAISE_PER_RUPEE)
        }
    }

    /// The amount added by [`Money::ceil_to_rupee`]; always in `[0, ₹1)`.
    #[inline]
    pub const fn rounding_to_rupee(&self) -> Money {
        Money(self.ceil_to_rupee().0 - self.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
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

/// Addition assignment (+=).
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

/// Multiplication by integer (for quantity calculations).
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
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(1000).paise(), 100_000);
        assert_eq!(Money::from_rupees(0).paise(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_percent_of_basic() {
        // ₹10.00 at 10% = ₹1.00
        let amount = Money::from_paise(1000);
        assert_eq!(amount.percent_of(Percent::from_bps(1000)).paise(), 100);
    }

    #[test]
    fn test_percent_of_with_rounding() {
        // ₹10.00 at 8.25% = ₹0.825 → ₹0.83 (half rounds up via +5000)
        let amount = Money::from_paise(1000);
        assert_eq!(amount.percent_of(Percent::from_bps(825)).paise(), 83);
    }

    #[test]
    fn test_percent_discount() {
        let line = Money::from_paise(10_000); // ₹100.00
        let discounted = line.apply_percent_discount(Percent::from_bps(1250)); // 12.5%
        assert_eq!(discounted.paise(), 8_750); // ₹87.50
    }

    #[test]
    fn test_ceil_to_rupee() {
        assert_eq!(Money::from_paise(105_610).ceil_to_rupee().paise(), 105_700);
        assert_eq!(Money::from_paise(105_700).ceil_to_rupee().paise(), 105_700);
        assert_eq!(Money::from_paise(1).ceil_to_rupee().paise(), 100);
        assert_eq!(Money::from_paise(0).ceil_to_rupee().paise(), 0);
    }

    #[test]
    fn test_rounding_to_rupee_is_always_below_one_rupee() {
        for paise in [0, 1, 50, 99, 100, 101, 105_610, 999_999] {
            let rounding = Money::from_paise(paise).rounding_to_rupee();
            assert!(!rounding.is_negative(), "rounding negative for {}", paise);
            assert!(rounding.paise() < 100, "rounding >= ₹1 for {}", paise);
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_paise(100);
        assert!(positive.is_positive());

        let negative = Money::from_paise(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_clamp() {
        let lo = Money::zero();
        let hi = Money::from_paise(1000);
        assert_eq!(Money::from_paise(-5).clamp(lo, hi).paise(), 0);
        assert_eq!(Money::from_paise(500).clamp(lo, hi).paise(), 500);
        assert_eq!(Money::from_paise(2000).clamp(lo, hi).paise(), 1000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_paise(29_900);
        assert_eq!(unit_price.multiply_quantity(3).paise(), 89_700);
    }
}
