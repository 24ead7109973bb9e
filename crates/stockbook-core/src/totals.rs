//! # Order Totals
//!
//! Derives the full totals block of an order or purchase from the line
//! items, the bill-level discounts, and the GST configuration.
//!
//! ## Derivation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Totals Derivation (fixed order)                      │
//! │                                                                         │
//! │  subtotal = Σ line_total                                                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  − bill discount        (percentage or amount, clamped to remaining)    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  − special discount     (second discount, same rules, applied AFTER)    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  taxable amount                                                         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  + GST                  (IGST, or CGST and SGST computed separately)    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ceil to whole rupee ──► rounding_off in [0, ₹1) ──► grand total       │
//! │                                                                         │
//! │  The order bill → special → tax → rounding is a CONTRACT. Totals are   │
//! │  pure and idempotent: same inputs, same outputs, no hidden state.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::items::LineItems;
use crate::money::Money;
use crate::types::{Discount, Percent, TaxConfig};

// =============================================================================
// Tax Amounts
// =============================================================================

/// The tax breakdown of an order, mirroring the active [`TaxConfig`] mode.
///
/// CGST and SGST are computed independently (each rounded half-up on its
/// own) and summed; invoices print both components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TaxAmounts {
    Igst { amount: Money },
    SplitGst { cgst: Money, sgst: Money },
}

impl TaxAmounts {
    /// Sum of all tax components.
    pub fn total(&self) -> Money {
        match self {
            TaxAmounts::Igst { amount } => *amount,
            TaxAmounts::SplitGst { cgst, sgst } => *cgst + *sgst,
        }
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Fully-derived totals of a draft. Recomputed from scratch on every
/// line-item, discount or tax-config change; never mutated field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    /// Σ line_total.
    pub subtotal: Money,

    /// Bill discount actually applied (after clamping).
    pub bill_discount: Money,

    /// Special discount actually applied (after clamping).
    pub special_discount: Money,

    /// subtotal − bill_discount − special_discount.
    pub taxable_amount: Money,

    /// Tax breakdown per the active config.
    pub tax: TaxAmounts,

    /// ceil(taxable + tax) − (taxable + tax); always in [0, ₹1).
    pub rounding_off: Money,

    /// ceil(taxable + tax); always a whole-rupee amount. Deliberate
    /// business rule, not a float artifact.
    pub total: Money,
}

impl OrderTotals {
    /// Totals of an empty draft.
    pub fn empty(tax_config: &TaxConfig) -> Self {
        calculate(&LineItems::new(), None, None, tax_config)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Derives [`OrderTotals`] from the current draft state.
///
/// Pure and deterministic; all inputs are clamped rather than rejected
/// (a negative discount amount is treated as 0, an oversized one as the
/// full remaining amount).
///
/// ## Example
/// ```rust
/// use stockbook_core::items::LineItems;
/// use stockbook_core::money::Money;
/// use stockbook_core::totals::calculate;
/// use stockbook_core::types::{Discount, TaxConfig};
///
/// let mut lines = LineItems::new();
/// lines.add_or_increment("v1", "Blue XL", Money::from_rupees(1000));
///
/// let totals = calculate(
///     &lines,
///     Some(&Discount::Percentage { bps: 1000 }),   // bill: 10%
///     Some(&Discount::Amount { paise: 500 }),      // special: ₹5
///     &TaxConfig::Igst { rate_bps: 1800 },         // 18%
/// );
///
/// assert_eq!(totals.taxable_amount, Money::from_paise(89_500)); // ₹895.00
/// assert_eq!(totals.total, Money::from_rupees(1057));
/// ```
pub fn calculate(
    items: &LineItems,
    bill_discount: Option<&Discount>,
    special_discount: Option<&Discount>,
    tax_config: &TaxConfig,
) -> OrderTotals {
    let subtotal = items.subtotal();

    // Bill discount first, special discount second - the order is a contract
    let bill_amount = discount_amount(subtotal, bill_discount);
    let after_bill = subtotal - bill_amount;

    let special_amount = discount_amount(after_bill, special_discount);
    let taxable_amount = after_bill - special_amount;

    // Tax last, on the fully-discounted amount
    let tax = tax_amounts(taxable_amount, tax_config);

    let raw_total = taxable_amount + tax.total();
    let total = raw_total.ceil_to_rupee();
    let rounding_off = raw_total.rounding_to_rupee();

    OrderTotals {
        subtotal,
        bill_discount: bill_amount,
        special_discount: special_amount,
        taxable_amount,
        tax,
        rounding_off,
        total,
    }
}

/// The amount a discount removes from `base`, clamped into `[0, base]`.
fn discount_amount(base: Money, discount: Option<&Discount>) -> Money {
    let raw = match discount {
        None => Money::zero(),
        Some(Discount::Percentage { bps }) => {
            base.percent_of(Percent::from_bps(*bps).clamp_discount())
        }
        Some(Discount::Amount { paise }) => Money::from_paise(*paise),
    };
    let ceiling = if base.is_negative() { Money::zero() } else { base };
    raw.clamp(Money::zero(), ceiling)
}

fn tax_amounts(taxable: Money, config: &TaxConfig) -> TaxAmounts {
    match config {
        TaxConfig::Igst { rate_bps } => TaxAmounts::Igst {
            amount: taxable.percent_of(Percent::from_bps(*rate_bps)),
        },
        TaxConfig::SplitGst { cgst_bps, sgst_bps } => TaxAmounts::SplitGst {
            cgst: taxable.percent_of(Percent::from_bps(*cgst_bps)),
            sgst: taxable.percent_of(Percent::from_bps(*sgst_bps)),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn thousand_rupee_lines() -> LineItems {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", Money::from_rupees(1000));
        lines
    }

    #[test]
    fn test_discount_ordering_contract() {
        // subtotal ₹1000, bill 10%, special ₹5 flat, IGST 18%
        // after bill: ₹900, after special: ₹895
        // tax: ₹161.10, raw total ₹1056.10 → ₹1057, rounding ₹0.90
        let lines = thousand_rupee_lines();
        let totals = calculate(
            &lines,
            Some(&Discount::Percentage { bps: 1000 }),
            Some(&Discount::Amount { paise: 500 }),
            &TaxConfig::Igst { rate_bps: 1800 },
        );

        assert_eq!(totals.subtotal, Money::from_rupees(1000));
        assert_eq!(totals.bill_discount, Money::from_rupees(100));
        assert_eq!(totals.special_discount, Money::from_paise(500));
        assert_eq!(totals.taxable_amount, Money::from_paise(89_500));
        assert_eq!(totals.tax.total(), Money::from_paise(16_110));
        assert_eq!(totals.rounding_off, Money::from_paise(90));
        assert_eq!(totals.total, Money::from_rupees(1057));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let lines = thousand_rupee_lines();
        let bill = Discount::Percentage { bps: 750 };
        let tax = TaxConfig::SplitGst {
            cgst_bps: 900,
            sgst_bps: 900,
        };

        let first = calculate(&lines, Some(&bill), None, &tax);
        let second = calculate(&lines, Some(&bill), None, &tax);
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_gst_components_reported_separately() {
        let lines = thousand_rupee_lines();
        let totals = calculate(
            &lines,
            None,
            None,
            &TaxConfig::SplitGst {
                cgst_bps: 900,
                sgst_bps: 900,
            },
        );

        match totals.tax {
            TaxAmounts::SplitGst { cgst, sgst } => {
                assert_eq!(cgst, Money::from_rupees(90));
                assert_eq!(sgst, Money::from_rupees(90));
            }
            TaxAmounts::Igst { .. } => panic!("expected split breakdown"),
        }
        assert_eq!(totals.tax.total(), Money::from_rupees(180));
        assert_eq!(totals.total, Money::from_rupees(1180));
        assert_eq!(totals.rounding_off, Money::zero());
    }

    #[test]
    fn test_negative_discount_amount_is_clamped_to_zero() {
        let lines = thousand_rupee_lines();
        let totals = calculate(
            &lines,
            Some(&Discount::Amount { paise: -5000 }),
            None,
            &TaxConfig::none(),
        );
        assert_eq!(totals.bill_discount, Money::zero());
        assert_eq!(totals.taxable_amount, Money::from_rupees(1000));
    }

    #[test]
    fn test_oversized_discount_never_goes_negative() {
        let lines = thousand_rupee_lines();
        let totals = calculate(
            &lines,
            Some(&Discount::Amount {
                paise: 5_000_000, // ₹50,000 off a ₹1000 bill
            }),
            Some(&Discount::Percentage { bps: 5000 }),
            &TaxConfig::Igst { rate_bps: 1800 },
        );

        assert_eq!(totals.bill_discount, Money::from_rupees(1000));
        assert_eq!(totals.taxable_amount, Money::zero());
        assert_eq!(totals.special_discount, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_total_is_whole_rupee_and_rounding_in_range() {
        let cases = [
            (Money::from_paise(99_901), 1800),
            (Money::from_paise(100_000), 1800),
            (Money::from_paise(33_333), 500),
            (Money::from_paise(1), 2800),
        ];

        for (price, rate_bps) in cases {
            let mut lines = LineItems::new();
            lines.add_or_increment("v1", "A", price);
            let totals = calculate(&lines, None, None, &TaxConfig::Igst { rate_bps });

            assert_eq!(totals.total.paise() % 100, 0, "total not whole-rupee");
            assert!(!totals.total.is_negative());
            assert!(totals.rounding_off.paise() >= 0);
            assert!(totals.rounding_off.paise() < 100);
            assert_eq!(
                totals.total,
                totals.taxable_amount + totals.tax.total() + totals.rounding_off
            );
        }
    }

    #[test]
    fn test_empty_draft_totals_are_all_zero() {
        let totals = OrderTotals::empty(&TaxConfig::Igst { rate_bps: 1800 });
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.taxable_amount, Money::zero());
        assert_eq!(totals.tax.total(), Money::zero());
        assert_eq!(totals.total, Money::zero());
        assert_eq!(totals.rounding_off, Money::zero());
    }
}
