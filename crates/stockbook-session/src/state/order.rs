//! # Order Draft State
//!
//! Manages the current order or purchase draft.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Draft Operations                               │
//! │                                                                         │
//! │  Frontend Action          Service Function          Draft Change        │
//! │  ───────────────          ────────────────          ────────────        │
//! │                                                                         │
//! │  Pick variant+size ──────► add_to_order() ────────► lines.add/qty+1    │
//! │                                                                         │
//! │  Edit quantity ──────────► set_item_quantity() ───► qty = n            │
//! │                                                                         │
//! │  Edit discount % ────────► set_item_discount() ───► discount = d       │
//! │                                                                         │
//! │  Edit bill discount ─────► set_bill_discount() ───► bill_discount = d  │
//! │                                                                         │
//! │  Switch GST mode ────────► set_tax_config() ──────► tax = config       │
//! │                                                                         │
//! │  NOTE: totals are re-derived by totals() on EVERY snapshot - there is  │
//! │  no cached totals field that could go stale. The derivation is cheap   │
//! │  and the explicit call replaces the source's reactive subscriptions.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use stockbook_core::items::LineItems;
use stockbook_core::totals::{self, OrderTotals};
use stockbook_core::types::{Discount, OrderKind, TaxConfig};

/// The in-progress order or purchase.
///
/// ## Invariants
/// - Line items are unique by variant id
/// - Discount order is bill first, special second; tax applies after both
/// - Totals are always derived, never stored
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Purchase (buying prices) or sales (selling prices).
    pub kind: OrderKind,

    /// The line items.
    pub lines: LineItems,

    /// Optional bill-level discount, applied first.
    pub bill_discount: Option<Discount>,

    /// Optional special discount, applied after the bill discount.
    pub special_discount: Option<Discount>,

    /// Active GST configuration.
    pub tax: TaxConfig,
}

impl OrderDraft {
    /// Creates an empty draft of the given kind.
    pub fn new(kind: OrderKind, tax: TaxConfig) -> Self {
        OrderDraft {
            kind,
            lines: LineItems::new(),
            bill_discount: None,
            special_discount: None,
            tax,
        }
    }

    /// Re-derives the full totals block from the current draft state.
    pub fn totals(&self) -> OrderTotals {
        totals::calculate(
            &self.lines,
            self.bill_discount.as_ref(),
            self.special_discount.as_ref(),
            &self.tax,
        )
    }

    /// Empties the draft, keeping kind and tax configuration.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.bill_discount = None;
        self.special_discount = None;
    }
}

/// Session-held order draft.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderDraft>>`: each service call takes exclusive access
/// for the duration of one mutation + snapshot. Operations are quick and
/// mostly writes, so a plain Mutex beats a RwLock here.
#[derive(Debug, Clone)]
pub struct OrderState {
    draft: Arc<Mutex<OrderDraft>>,
}

impl OrderState {
    /// Creates a new empty draft state.
    pub fn new(kind: OrderKind, tax: TaxConfig) -> Self {
        OrderState {
            draft: Arc::new(Mutex::new(OrderDraft::new(kind, tax))),
        }
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderDraft) -> R,
    {
        let draft = self.draft.lock().expect("Order mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("Order mutex poisoned");
        f(&mut draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::money::Money;

    #[test]
    fn test_totals_follow_every_mutation() {
        let state = OrderState::new(OrderKind::Sales, TaxConfig::Igst { rate_bps: 1800 });

        state.with_draft_mut(|d| {
            d.lines
                .add_or_increment("v1", "Blue XL", Money::from_rupees(500));
        });
        assert_eq!(
            state.with_draft(|d| d.totals().subtotal),
            Money::from_rupees(500)
        );

        state.with_draft_mut(|d| d.lines.set_quantity("v1", 3).unwrap());
        assert_eq!(
            state.with_draft(|d| d.totals().subtotal),
            Money::from_rupees(1500)
        );
    }

    #[test]
    fn test_clear_keeps_kind_and_tax() {
        let state = OrderState::new(OrderKind::Purchase, TaxConfig::Igst { rate_bps: 1200 });
        state.with_draft_mut(|d| {
            d.lines.add_or_increment("v1", "A", Money::from_rupees(10));
            d.bill_discount = Some(Discount::Percentage { bps: 500 });
            d.clear();
        });

        state.with_draft(|d| {
            assert!(d.lines.is_empty());
            assert!(d.bill_discount.is_none());
            assert_eq!(d.kind, OrderKind::Purchase);
            assert_eq!(d.tax, TaxConfig::Igst { rate_bps: 1200 });
        });
    }
}
