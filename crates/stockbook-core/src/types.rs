//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Variant     │   │   VariantSize   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  id (UUID)      │──►│  size           │       │
//! │  │  name           │   │  name           │   │  buying_price   │       │
//! │  │  hsn            │   │  barcode        │   │  selling_price  │       │
//! │  │  variants       │   │  sizes          │   │  stock          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Percent      │   │    TaxConfig    │   │    Discount     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Igst { rate }  │   │  Percentage     │       │
//! │  │  1800 = 18%     │   │  SplitGst {     │   │  Amount         │       │
//! │  └─────────────────┘   │    cgst, sgst } │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Products and variants carry UUID v4 string ids assigned by the external
//! data layer; business identifiers (barcode, HSN) are optional and mutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the common IGST slab)
/// 1250 bps = 12.5% (fractional discounts stay exact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// 0%.
    pub const ZERO: Percent = Percent(0);

    /// 100%.
    pub const HUNDRED: Percent = Percent(10_000);

    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from a float percentage (for convenience).
    ///
    /// Negative and non-finite inputs collapse to 0%.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return Percent::ZERO;
        }
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a float percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Clamps into the discount range `[0%, 100%]`.
    #[inline]
    pub fn clamp_discount(&self) -> Percent {
        Percent(self.0.min(Percent::HUNDRED.0))
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::ZERO
    }
}

// =============================================================================
// Catalog Records
// =============================================================================

/// One size row of a variant: the unit of stock-keeping and pricing.
///
/// All numeric fields are non-negative; [`crate::validation::validate_sizes`]
/// enforces this at edit-commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantSize {
    /// Size label ("S", "XL", "40", ...). Unique within a variant
    /// (case-insensitive, trimmed).
    pub size: String,

    /// Purchase rate in paise.
    pub buying_price_paise: i64,

    /// Sale rate in paise.
    pub selling_price_paise: i64,

    /// Units on hand.
    pub stock: i64,
}

impl VariantSize {
    /// Returns the buying price as Money.
    #[inline]
    pub fn buying_price(&self) -> Money {
        Money::from_paise(self.buying_price_paise)
    }

    /// Returns the selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_paise(self.selling_price_paise)
    }
}

/// A sellable configuration of a product (colour/style), owning its sizes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name ("Blue XL", "Checked Slim", ...).
    pub name: String,

    /// Barcode (EAN-13, UPC-A, ...). Scanned barcodes match this exactly.
    pub barcode: Option<String>,

    /// Ordered size list. No duplicate size names within one variant.
    pub sizes: Vec<VariantSize>,
}

impl Variant {
    /// Looks up a size row by its (trimmed, case-insensitive) label.
    pub fn size(&self, size: &str) -> Option<&VariantSize> {
        let wanted = size.trim().to_lowercase();
        self.sizes
            .iter()
            .find(|s| s.size.trim().to_lowercase() == wanted)
    }

    /// Sum of stock across all sizes.
    pub fn total_stock(&self) -> i64 {
        self.sizes.iter().map(|s| s.stock).sum()
    }
}

/// A product in the catalog, owning its variants.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in search results and on invoices.
    pub name: String,

    /// HSN classification code, treated as an opaque category key.
    pub hsn: Option<String>,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// Variants of this product.
    pub variants: Vec<Variant>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Minimum buying price across all sizes of all variants; 0 if the
    /// product has no sizes. This is the browse-mode price sort key.
    pub fn min_buying_price_paise(&self) -> i64 {
        self.variants
            .iter()
            .flat_map(|v| v.sizes.iter())
            .map(|s| s.buying_price_paise)
            .min()
            .unwrap_or(0)
    }

    /// Sum of stock across all sizes of all variants. This is the
    /// browse-mode stock sort key.
    pub fn total_stock(&self) -> i64 {
        self.variants.iter().map(|v| v.total_stock()).sum()
    }

    /// Looks up a variant by id.
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

// =============================================================================
// Tax Configuration
// =============================================================================

/// GST configuration for an order or purchase.
///
/// Exactly one mode is active at a time. Encoding this as an enum (rather
/// than a struct with optional rate fields) guarantees that switching from
/// split to single-rate mode cannot leave a stale CGST/SGST rate behind to
/// be applied by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TaxConfig {
    /// Single inter-state rate.
    Igst { rate_bps: u32 },

    /// Split intra-state rate; CGST and SGST are computed independently
    /// and summed.
    SplitGst { cgst_bps: u32, sgst_bps: u32 },
}

impl TaxConfig {
    /// Tax-free configuration (0% IGST).
    pub const fn none() -> Self {
        TaxConfig::Igst { rate_bps: 0 }
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig::none()
    }
}

// =============================================================================
// Discounts
// =============================================================================

/// A bill-level discount: either a percentage of the running amount or a
/// flat rupee amount. Both are clamped into `[0, remaining]` when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discount {
    Percentage { bps: u32 },
    Amount { paise: i64 },
}

// =============================================================================
// Order Kind
// =============================================================================

/// Whether a draft is a purchase order (we buy) or a sales order (we sell).
///
/// The kind decides which price a picked size contributes as the line's
/// unit price: buying price for purchases, selling price for sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Purchase,
    Sales,
}

impl OrderKind {
    /// Unit price contributed by a size row for this order kind.
    pub fn unit_price(&self, size: &VariantSize) -> Money {
        match self {
            OrderKind::Purchase => size.buying_price(),
            OrderKind::Sales => size.selling_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
