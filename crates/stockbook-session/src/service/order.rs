//! # Order Services
//!
//! Draft manipulation for orders and purchases.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │  Empty   │────►│  Lines   │────►│  Handed to   │                    │
//! │  │  Draft   │     │  + GST   │     │  invoicing   │                    │
//! │  └──────────┘     └──────────┘     │  (external)  │                    │
//! │                        │           └──────────────┘                    │
//! │                   add_to_order                                          │
//! │                   set_item_quantity / discount / unit price             │
//! │                   set_bill_discount / special_discount                  │
//! │                   set_tax_config                                        │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_order ─────────────────► (back to empty)        │
//! │                                                                         │
//! │  Every service returns a full OrderSnapshot: items plus freshly        │
//! │  re-derived totals. The rendering layer never computes money.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::state::{CatalogState, OrderDraft, OrderState};
use stockbook_core::input;
use stockbook_core::items::LineItem;
use stockbook_core::totals::{OrderTotals, TaxAmounts};
use stockbook_core::types::{Discount, Percent, TaxConfig};
use stockbook_core::validation;

// =============================================================================
// DTOs
// =============================================================================

/// One line of the draft as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    pub variant_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price_paise: i64,
    pub discount_bps: u32,
    pub line_total_paise: i64,
}

impl From<&LineItem> for LineItemDto {
    fn from(item: &LineItem) -> Self {
        LineItemDto {
            variant_id: item.variant_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price_paise: item.unit_price.paise(),
            discount_bps: item.discount.bps(),
            line_total_paise: item.line_total.paise(),
        }
    }
}

/// Tax breakdown for display: either a single IGST amount or both split
/// components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum TaxDto {
    #[serde(rename_all = "camelCase")]
    Igst { amount_paise: i64 },
    #[serde(rename_all = "camelCase")]
    SplitGst { cgst_paise: i64, sgst_paise: i64 },
}

/// The fully-derived totals block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDto {
    pub subtotal_paise: i64,
    pub bill_discount_paise: i64,
    pub special_discount_paise: i64,
    pub taxable_amount_paise: i64,
    pub tax: TaxDto,
    pub tax_total_paise: i64,
    pub rounding_off_paise: i64,
    pub total_paise: i64,
}

impl From<&OrderTotals> for TotalsDto {
    fn from(t: &OrderTotals) -> Self {
        let tax = match t.tax {
            TaxAmounts::Igst { amount } => TaxDto::Igst {
                amount_paise: amount.paise(),
            },
            TaxAmounts::SplitGst { cgst, sgst } => TaxDto::SplitGst {
                cgst_paise: cgst.paise(),
                sgst_paise: sgst.paise(),
            },
        };
        TotalsDto {
            subtotal_paise: t.subtotal.paise(),
            bill_discount_paise: t.bill_discount.paise(),
            special_discount_paise: t.special_discount.paise(),
            taxable_amount_paise: t.taxable_amount.paise(),
            tax,
            tax_total_paise: t.tax.total().paise(),
            rounding_off_paise: t.rounding_off.paise(),
            total_paise: t.total.paise(),
        }
    }
}

/// Draft snapshot: items and totals, re-derived on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub items: Vec<LineItemDto>,
    pub totals: TotalsDto,
}

impl From<&OrderDraft> for OrderSnapshot {
    fn from(draft: &OrderDraft) -> Self {
        let totals = draft.totals();
        OrderSnapshot {
            items: draft.lines.items().iter().map(LineItemDto::from).collect(),
            totals: TotalsDto::from(&totals),
        }
    }
}

// =============================================================================
// Form Inputs
// =============================================================================

/// A bill-level discount as entered in the form: a type selector plus a
/// raw text value. The value is coerced here, once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountInput {
    Percentage { value: String },
    Amount { value: String },
}

impl DiscountInput {
    fn coerce(&self) -> Discount {
        match self {
            DiscountInput::Percentage { value } => Discount::Percentage {
                bps: input::parse_percent(value).bps(),
            },
            DiscountInput::Amount { value } => Discount::Amount {
                paise: input::parse_amount(value).paise(),
            },
        }
    }
}

/// GST configuration as entered in the form. Rates are raw text; malformed
/// input coerces to 0%, but a rate above 100% is a structural violation
/// and rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TaxInput {
    Igst { rate: String },
    SplitGst { cgst: String, sgst: String },
}

impl TaxInput {
    fn coerce(&self) -> Result<TaxConfig, SessionError> {
        let rate_bps = |raw: &str| -> Result<u32, SessionError> {
            let bps = Percent::from_percentage(raw.trim().parse::<f64>().unwrap_or(0.0)).bps();
            validation::validate_tax_rate_bps(bps)?;
            Ok(bps)
        };

        Ok(match self {
            TaxInput::Igst { rate } => TaxConfig::Igst {
                rate_bps: rate_bps(rate)?,
            },
            TaxInput::SplitGst { cgst, sgst } => TaxConfig::SplitGst {
                cgst_bps: rate_bps(cgst)?,
                sgst_bps: rate_bps(sgst)?,
            },
        })
    }
}

// =============================================================================
// Services
// =============================================================================

/// Returns the current draft snapshot.
pub fn get_order(order: &OrderState) -> OrderSnapshot {
    debug!("get_order");
    order.with_draft(|draft| OrderSnapshot::from(draft))
}

/// Adds a variant to the draft, or increments its quantity if already
/// present.
///
/// The chosen size resolves the unit price: buying price for purchase
/// drafts, selling price for sales drafts. The price and display name are
/// frozen on the line at this moment.
pub fn add_to_order(
    order: &OrderState,
    catalog: &CatalogState,
    variant_id: &str,
    size: &str,
) -> Result<OrderSnapshot, SessionError> {
    debug!(variant_id = %variant_id, size = %size, "add_to_order");

    let (product_name, variant) = catalog
        .find_variant(variant_id)
        .ok_or_else(|| SessionError::not_found("Variant", variant_id))?;
    let size_row = variant
        .size(size)
        .ok_or_else(|| SessionError::not_found("Size", size))?;

    let name = format!("{} {}", product_name, variant.name);

    Ok(order.with_draft_mut(|draft| {
        let unit_price = draft.kind.unit_price(size_row);
        draft.lines.add_or_increment(variant_id, &name, unit_price);
        OrderSnapshot::from(&*draft)
    }))
}

/// Sets the quantity of a line from a raw form string.
///
/// Non-integer or negative input coerces to the line's previous quantity;
/// valid input clamps to >= 0.
pub fn set_item_quantity(
    order: &OrderState,
    variant_id: &str,
    raw_quantity: &str,
) -> Result<OrderSnapshot, SessionError> {
    debug!(variant_id = %variant_id, raw = %raw_quantity, "set_item_quantity");

    order.with_draft_mut(|draft| {
        let previous = draft.lines.get(variant_id).map(|i| i.quantity).unwrap_or(1);
        let quantity = input::parse_quantity(raw_quantity, previous);
        draft.lines.set_quantity(variant_id, quantity)?;
        Ok(OrderSnapshot::from(&*draft))
    })
}

/// Sets the per-line discount from a raw form string, clamped to [0, 100].
pub fn set_item_discount(
    order: &OrderState,
    variant_id: &str,
    raw_percent: &str,
) -> Result<OrderSnapshot, SessionError> {
    debug!(variant_id = %variant_id, raw = %raw_percent, "set_item_discount");

    order.with_draft_mut(|draft| {
        let discount = input::parse_percent(raw_percent);
        draft.lines.set_discount(variant_id, discount)?;
        Ok(OrderSnapshot::from(&*draft))
    })
}

/// Sets the unit price of a line from a raw form string (purchase forms
/// edit the rate), clamped to >= 0.
pub fn set_item_unit_price(
    order: &OrderState,
    variant_id: &str,
    raw_amount: &str,
) -> Result<OrderSnapshot, SessionError> {
    debug!(variant_id = %variant_id, raw = %raw_amount, "set_item_unit_price");

    order.with_draft_mut(|draft| {
        let unit_price = input::parse_amount(raw_amount);
        draft.lines.set_unit_price(variant_id, unit_price)?;
        Ok(OrderSnapshot::from(&*draft))
    })
}

/// Removes a line from the draft.
pub fn remove_order_item(
    order: &OrderState,
    variant_id: &str,
) -> Result<OrderSnapshot, SessionError> {
    debug!(variant_id = %variant_id, "remove_order_item");

    order.with_draft_mut(|draft| {
        draft.lines.remove(variant_id)?;
        Ok(OrderSnapshot::from(&*draft))
    })
}

/// Sets or clears the bill-level discount (applied first).
pub fn set_bill_discount(order: &OrderState, discount: Option<DiscountInput>) -> OrderSnapshot {
    debug!(?discount, "set_bill_discount");

    order.with_draft_mut(|draft| {
        draft.bill_discount = discount.as_ref().map(DiscountInput::coerce);
        OrderSnapshot::from(&*draft)
    })
}

/// Sets or clears the special discount (applied after the bill discount).
pub fn set_special_discount(order: &OrderState, discount: Option<DiscountInput>) -> OrderSnapshot {
    debug!(?discount, "set_special_discount");

    order.with_draft_mut(|draft| {
        draft.special_discount = discount.as_ref().map(DiscountInput::coerce);
        OrderSnapshot::from(&*draft)
    })
}

/// Switches the GST configuration. Selecting a mode replaces the whole
/// config - no rate from the previous mode survives the switch.
pub fn set_tax_config(order: &OrderState, tax: TaxInput) -> Result<OrderSnapshot, SessionError> {
    debug!(?tax, "set_tax_config");

    let config = tax.coerce()?;
    Ok(order.with_draft_mut(|draft| {
        draft.tax = config;
        OrderSnapshot::from(&*draft)
    }))
}

/// Empties the draft, keeping its kind and tax configuration.
pub fn clear_order(order: &OrderState) -> OrderSnapshot {
    debug!("clear_order");

    order.with_draft_mut(|draft| {
        draft.clear();
        OrderSnapshot::from(&*draft)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use stockbook_core::types::{OrderKind, Product, Variant, VariantSize};

    fn test_catalog() -> CatalogState {
        let catalog = CatalogState::new();
        catalog.load(vec![Product {
            id: "p1".to_string(),
            name: "Shirt".to_string(),
            hsn: None,
            is_active: true,
            variants: vec![Variant {
                id: "v1".to_string(),
                name: "Blue XL".to_string(),
                barcode: None,
                sizes: vec![VariantSize {
                    size: "XL".to_string(),
                    buying_price_paise: 60_000,  // ₹600
                    selling_price_paise: 100_000, // ₹1000
                    stock: 12,
                }],
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }]);
        catalog
    }

    fn sales_order() -> OrderState {
        OrderState::new(OrderKind::Sales, TaxConfig::Igst { rate_bps: 1800 })
    }

    #[test]
    fn test_add_uses_selling_price_for_sales_orders() {
        let order = sales_order();
        let catalog = test_catalog();

        let snapshot = add_to_order(&order, &catalog, "v1", "XL").unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].unit_price_paise, 100_000);
        assert_eq!(snapshot.items[0].name, "Shirt Blue XL");
        assert_eq!(snapshot.items[0].quantity, 1);
    }

    #[test]
    fn test_add_uses_buying_price_for_purchases() {
        let order = OrderState::new(OrderKind::Purchase, TaxConfig::none());
        let catalog = test_catalog();

        let snapshot = add_to_order(&order, &catalog, "v1", "XL").unwrap();
        assert_eq!(snapshot.items[0].unit_price_paise, 60_000);
    }

    #[test]
    fn test_add_twice_increments_quantity() {
        let order = sales_order();
        let catalog = test_catalog();

        add_to_order(&order, &catalog, "v1", "XL").unwrap();
        let snapshot = add_to_order(&order, &catalog, "v1", "XL").unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 2);
        assert_eq!(snapshot.items[0].line_total_paise, 200_000);
    }

    #[test]
    fn test_add_unknown_variant_or_size() {
        let order = sales_order();
        let catalog = test_catalog();

        let err = add_to_order(&order, &catalog, "missing", "XL").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_order(&order, &catalog, "v1", "S").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_garbage_quantity_keeps_previous_value() {
        let order = sales_order();
        let catalog = test_catalog();
        add_to_order(&order, &catalog, "v1", "XL").unwrap();

        let snapshot = set_item_quantity(&order, "v1", "5").unwrap();
        assert_eq!(snapshot.items[0].quantity, 5);

        let snapshot = set_item_quantity(&order, "v1", "abc").unwrap();
        assert_eq!(snapshot.items[0].quantity, 5);

        let snapshot = set_item_quantity(&order, "v1", "-2").unwrap();
        assert_eq!(snapshot.items[0].quantity, 5);
    }

    #[test]
    fn test_full_pricing_flow_matches_contract() {
        // ₹1000 line, bill 10%, special ₹5, IGST 18% → total ₹1057
        let order = sales_order();
        let catalog = test_catalog();
        add_to_order(&order, &catalog, "v1", "XL").unwrap();

        set_bill_discount(
            &order,
            Some(DiscountInput::Percentage {
                value: "10".to_string(),
            }),
        );
        let snapshot = set_special_discount(
            &order,
            Some(DiscountInput::Amount {
                value: "5".to_string(),
            }),
        );

        assert_eq!(snapshot.totals.subtotal_paise, 100_000);
        assert_eq!(snapshot.totals.bill_discount_paise, 10_000);
        assert_eq!(snapshot.totals.special_discount_paise, 500);
        assert_eq!(snapshot.totals.taxable_amount_paise, 89_500);
        assert_eq!(snapshot.totals.tax_total_paise, 16_110);
        assert_eq!(snapshot.totals.rounding_off_paise, 90);
        assert_eq!(snapshot.totals.total_paise, 105_700);
    }

    #[test]
    fn test_tax_mode_switch_drops_old_rates() {
        let order = sales_order();
        let snapshot = set_tax_config(
            &order,
            TaxInput::SplitGst {
                cgst: "9".to_string(),
                sgst: "9".to_string(),
            },
        )
        .unwrap();
        assert!(matches!(snapshot.totals.tax, TaxDto::SplitGst { .. }));

        let snapshot = set_tax_config(
            &order,
            TaxInput::Igst {
                rate: "18".to_string(),
            },
        )
        .unwrap();
        assert!(matches!(snapshot.totals.tax, TaxDto::Igst { .. }));
    }

    #[test]
    fn test_tax_rate_above_hundred_percent_is_rejected() {
        let order = sales_order();
        let err = set_tax_config(
            &order,
            TaxInput::Igst {
                rate: "120".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let order = sales_order();
        let catalog = test_catalog();
        add_to_order(&order, &catalog, "v1", "XL").unwrap();

        let json = serde_json::to_value(get_order(&order)).unwrap();
        assert!(json["items"][0]["unitPricePaise"].is_i64());
        assert!(json["totals"]["roundingOffPaise"].is_i64());
        assert_eq!(json["totals"]["tax"]["mode"], "igst");
    }

    #[test]
    fn test_clear_order() {
        let order = sales_order();
        let catalog = test_catalog();
        add_to_order(&order, &catalog, "v1", "XL").unwrap();

        let snapshot = clear_order(&order);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.totals.total_paise, 0);
    }
}
