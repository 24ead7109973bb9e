//! # Input Coercion
//!
//! Parse-and-clamp boundary for user-entered form values.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Numeric Form Input Handling                         │
//! │                                                                         │
//! │  Raw string from a form field ("12", "12.5", "-3", "abc", "")          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: parse once, clamp to the nearest valid value              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Typed value (i64 quantity, Percent, Money) - carried internally,      │
//! │  never re-parsed                                                        │
//! │                                                                         │
//! │  Malformed input is coerced SILENTLY, never rejected: the form must    │
//! │  always stay in a displayable state. Structural violations are a       │
//! │  different class and go through `validation` instead.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::Percent;

/// Parses a quantity field.
///
/// Non-integer or negative input coerces to `fallback` (the previous valid
/// value, or 1 for a fresh line). Valid input is any integer >= 0.
///
/// ## Example
/// ```rust
/// use stockbook_core::input::parse_quantity;
///
/// assert_eq!(parse_quantity("7", 1), 7);
/// assert_eq!(parse_quantity("0", 1), 0);
/// assert_eq!(parse_quantity("-2", 3), 3);
/// assert_eq!(parse_quantity("2.5", 3), 3);
/// assert_eq!(parse_quantity("abc", 1), 1);
/// ```
pub fn parse_quantity(raw: &str, fallback: i64) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(qty) if qty >= 0 => qty,
        _ => fallback.max(0),
    }
}

/// Parses a discount-percentage field, clamped into `[0%, 100%]`.
///
/// ## Example
/// ```rust
/// use stockbook_core::input::parse_percent;
///
/// assert_eq!(parse_percent("12.5").bps(), 1250);
/// assert_eq!(parse_percent("150").bps(), 10_000); // clamped to 100%
/// assert_eq!(parse_percent("-4").bps(), 0);
/// assert_eq!(parse_percent("").bps(), 0);
/// ```
pub fn parse_percent(raw: &str) -> Percent {
    match raw.trim().parse::<f64>() {
        Ok(pct) => Percent::from_percentage(pct).clamp_discount(),
        Err(_) => Percent::ZERO,
    }
}

/// Parses a rupee amount field ("1056.10") into paise, clamped to >= 0.
///
/// ## Example
/// ```rust
/// use stockbook_core::input::parse_amount;
///
/// assert_eq!(parse_amount("1056.10").paise(), 105_610);
/// assert_eq!(parse_amount("5").paise(), 500);
/// assert_eq!(parse_amount("-10").paise(), 0);
/// assert_eq!(parse_amount("x").paise(), 0);
/// ```
pub fn parse_amount(raw: &str) -> Money {
    match raw.trim().parse::<f64>() {
        Ok(rupees) if rupees.is_finite() && rupees > 0.0 => {
            Money::from_paise((rupees * 100.0).round() as i64)
        }
        _ => Money::zero(),
    }
}

/// Parses a stock-adjustment amount field: integer units, clamped to >= 0.
///
/// ## Example
/// ```rust
/// use stockbook_core::input::parse_stock_amount;
///
/// assert_eq!(parse_stock_amount("25"), 25);
/// assert_eq!(parse_stock_amount("-5"), 0);
/// assert_eq!(parse_stock_amount("1.5"), 0);
/// ```
pub fn parse_stock_amount(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(units) if units >= 0 => units,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
