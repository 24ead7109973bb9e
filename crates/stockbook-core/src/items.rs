//! # Line-Item Collection
//!
//! The ordered list of line items inside an order or purchase draft.
//!
//! ## Line-Item Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line-Item Operations                                 │
//! │                                                                         │
//! │  Form Event               Operation                 Collection Change   │
//! │  ──────────               ─────────                 ─────────────────   │
//! │                                                                         │
//! │  Pick variant ──────────► add_or_increment() ─────► push / qty += 1    │
//! │                                                                         │
//! │  Edit quantity ─────────► set_quantity() ─────────► qty = n (>= 0)     │
//! │                                                                         │
//! │  Edit rate ─────────────► set_unit_price() ───────► unit_price = p     │
//! │                                                                         │
//! │  Edit discount % ───────► set_discount() ─────────► discount = d       │
//! │                                                                         │
//! │  Click remove ──────────► remove() ───────────────► items.remove(i)    │
//! │                                                                         │
//! │  INVARIANT: every mutation recomputes the affected line_total.          │
//! │  A stale line_total must never be readable.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller re-derives [`crate::totals::OrderTotals`] after each mutation;
//! that coupling is deliberate and explicit (no reactive subscriptions).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Percent;

/// One line of an order or purchase draft.
///
/// `line_total` is derived, never set directly:
/// `quantity × unit_price × (1 − discount)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Variant this line refers to (UUID).
    pub variant_id: String,

    /// Display name at the time of adding (frozen).
    pub name: String,

    /// Quantity; always >= 0.
    pub quantity: i64,

    /// Unit price at the time of adding, editable afterwards (purchase
    /// forms edit the rate per line).
    pub unit_price: Money,

    /// Per-line discount; always within [0%, 100%].
    pub discount: Percent,

    /// Derived: quantity × unit_price × (1 − discount).
    pub line_total: Money,
}

impl LineItem {
    fn new(variant_id: &str, name: &str, unit_price: Money) -> Self {
        let mut item = LineItem {
            variant_id: variant_id.to_string(),
            name: name.to_string(),
            quantity: 1,
            unit_price,
            discount: Percent::ZERO,
            line_total: Money::zero(),
        };
        item.recompute();
        item
    }

    /// Re-derives `line_total` from the current fields.
    fn recompute(&mut self) {
        self.line_total = self
            .unit_price
            .multiply_quantity(self.quantity)
            .apply_percent_discount(self.discount);
    }
}

/// The ordered line-item collection of one draft.
///
/// ## Invariants
/// - Lines are unique by `variant_id` (adding the same variant again
///   increments its quantity)
/// - `line_total` is recomputed on every mutation
/// - Quantity 0 keeps the line; removal is only the explicit `remove`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    /// Creates an empty collection.
    pub fn new() -> Self {
        LineItems { items: Vec::new() }
    }

    /// Adds a variant to the collection, or increments its quantity by 1
    /// if a line for it already exists.
    pub fn add_or_increment(&mut self, variant_id: &str, name: &str, unit_price: Money) {
        if let Some(item) = self.items.iter_mut().find(|i| i.variant_id == variant_id) {
            item.quantity += 1;
            item.recompute();
            return;
        }

        self.items.push(LineItem::new(variant_id, name, unit_price));
    }

    /// Sets the quantity of a line, clamped to >= 0.
    ///
    /// Form-level coercion of malformed input (non-integer, negative)
    /// happens in [`crate::input::parse_quantity`] before this is called.
    pub fn set_quantity(&mut self, variant_id: &str, quantity: i64) -> CoreResult<()> {
        let item = self.get_mut(variant_id)?;
        item.quantity = quantity.max(0);
        item.recompute();
        Ok(())
    }

    /// Sets the unit price of a line.
    pub fn set_unit_price(&mut self, variant_id: &str, unit_price: Money) -> CoreResult<()> {
        let item = self.get_mut(variant_id)?;
        item.unit_price = unit_price.clamp(Money::zero(), Money::from_paise(i64::MAX));
        item.recompute();
        Ok(())
    }

    /// Sets the per-line discount, clamped into [0%, 100%].
    pub fn set_discount(&mut self, variant_id: &str, discount: Percent) -> CoreResult<()> {
        let item = self.get_mut(variant_id)?;
        item.discount = discount.clamp_discount();
        item.recompute();
        Ok(())
    }

    /// Removes a line by variant id.
    pub fn remove(&mut self, variant_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.variant_id != variant_id);

        if self.items.len() == initial_len {
            Err(CoreError::LineNotFound(variant_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by variant id.
    pub fn get(&self, variant_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.variant_id == variant_id)
    }

    fn get_mut(&mut self, variant_id: &str) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.variant_id == variant_id)
            .ok_or_else(|| CoreError::LineNotFound(variant_id.to_string()))
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(r: i64) -> Money {
        Money::from_rupees(r)
    }

    #[test]
    fn test_add_new_line_starts_at_quantity_one() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", rupees(450));

        assert_eq!(lines.len(), 1);
        let item = lines.get("v1").unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.discount, Percent::ZERO);
        assert_eq!(item.line_total, rupees(450));
    }

    #[test]
    fn test_add_same_variant_increments_quantity() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", rupees(450));
        lines.add_or_increment("v1", "Blue XL", rupees(450));

        assert_eq!(lines.len(), 1);
        let item = lines.get("v1").unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total, rupees(900));
    }

    #[test]
    fn test_set_quantity_recomputes_line_total() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", rupees(450));

        lines.set_quantity("v1", 5).unwrap();
        assert_eq!(lines.get("v1").unwrap().line_total, rupees(2250));

        // Negative clamps to zero, the line stays
        lines.set_quantity("v1", -3).unwrap();
        let item = lines.get("v1").unwrap();
        assert_eq!(item.quantity, 0);
        assert_eq!(item.line_total, Money::zero());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_set_discount_recomputes_line_total() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", rupees(100));
        lines.set_quantity("v1", 2).unwrap();

        lines.set_discount("v1", Percent::from_bps(1000)).unwrap(); // 10%
        assert_eq!(lines.get("v1").unwrap().line_total, rupees(180));

        // Over 100% clamps to 100%
        lines.set_discount("v1", Percent::from_bps(15_000)).unwrap();
        assert_eq!(lines.get("v1").unwrap().line_total, Money::zero());
    }

    #[test]
    fn test_set_unit_price_recomputes_line_total() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "Blue XL", rupees(450));
        lines.set_quantity("v1", 3).unwrap();

        lines.set_unit_price("v1", rupees(400)).unwrap();
        assert_eq!(lines.get("v1").unwrap().line_total, rupees(1200));
    }

    #[test]
    fn test_line_total_invariant_after_every_mutation() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "A", rupees(199));
        lines.add_or_increment("v2", "B", rupees(350));
        lines.set_quantity("v1", 4).unwrap();
        lines.set_discount("v2", Percent::from_bps(2500)).unwrap();
        lines.set_unit_price("v1", rupees(210)).unwrap();

        for item in lines.items() {
            let expected = item
                .unit_price
                .multiply_quantity(item.quantity)
                .apply_percent_discount(item.discount);
            assert_eq!(item.line_total, expected);
        }
        assert_eq!(
            lines.subtotal(),
            lines
                .items()
                .iter()
                .fold(Money::zero(), |acc, i| acc + i.line_total)
        );
    }

    #[test]
    fn test_remove_line() {
        let mut lines = LineItems::new();
        lines.add_or_increment("v1", "A", rupees(100));
        lines.add_or_increment("v2", "B", rupees(200));

        lines.remove("v1").unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines.get("v1").is_none());

        assert!(matches!(
            lines.remove("v1"),
            Err(CoreError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_line_is_a_typed_error() {
        let mut lines = LineItems::new();
        assert!(matches!(
            lines.set_quantity("missing", 2),
            Err(CoreError::LineNotFound(_))
        ));
        assert!(matches!(
            lines.set_discount("missing", Percent::ZERO),
            Err(CoreError::LineNotFound(_))
        ));
    }
}
