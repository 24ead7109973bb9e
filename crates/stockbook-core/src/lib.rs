//! # stockbook-core: Pure Business Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockbook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend (external)                      │   │
//! │  │    Search UI ──► Order Form ──► Stock Modal ──► Invoice UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockbook-session (services)                    │   │
//! │  │    search_catalog, add_to_order, request_adjustment, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌─────────────┐ │   │
//! │  │  │  types  │ │ money  │ │ items  │ │ totals │ │   search    │ │   │
//! │  │  │ Product │ │ Money  │ │LineItem│ │ GST    │ │  ranking    │ │   │
//! │  │  │ Variant │ │Percent │ │ ops    │ │ totals │ │             │ │   │
//! │  │  └─────────┘ └────────┘ └────────┘ └────────┘ └─────────────┘ │   │
//! │  │  ┌─────────┐ ┌────────────┐ ┌─────────┐                       │   │
//! │  │  │  stock  │ │ validation │ │  input  │                       │   │
//! │  │  │  guard  │ │   rules    │ │ coerce  │                       │   │
//! │  │  └─────────┘ └────────────┘ └─────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Variant, TaxConfig, Discount, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`items`] - Line-item collection for orders and purchases
//! - [`totals`] - Order totals derivation (discounts, GST, rounding)
//! - [`search`] - Search ranking and browse sorting over the catalog
//! - [`stock`] - Stock-adjustment guard state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`input`] - Parse-and-clamp coercion for user-entered form values
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::money::Money;
//! use stockbook_core::types::Percent;
//!
//! // Create money from paise (never from floats!)
//! let price = Money::from_paise(109_900); // ₹1099.00
//!
//! // GST at 18%
//! let gst = price.percent_of(Percent::from_bps(1800));
//! assert_eq!(gst.paise(), 19_782); // ₹197.82
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod input;
pub mod items;
pub mod money;
pub mod search;
pub mod stock;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Money` instead of
// `use stockbook_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use items::{LineItem, LineItems};
pub use money::Money;
pub use stock::{AdjustmentState, StockAdjustment, StockMutation, StockOperation, Submission};
pub use totals::{OrderTotals, TaxAmounts};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Absolute stock change (in units) above which an adjustment needs an
/// explicit confirmation step.
///
/// ## Business Reason
/// Catches fat-finger entries (typing 1000 instead of 100) on products
/// with large stock levels, where the relative threshold never fires.
pub const LARGE_CHANGE_ABSOLUTE_UNITS: i64 = 100;

/// Relative stock change (percent of the old stock, strict) above which
/// an adjustment needs an explicit confirmation step.
///
/// ## Business Reason
/// A change of more than half the existing stock is almost always either
/// a stocktake correction or a typo; both deserve a second look.
pub const LARGE_CHANGE_PERCENT: i64 = 50;
