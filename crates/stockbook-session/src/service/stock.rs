//! # Stock Adjustment Services
//!
//! Drives the stock-adjustment guard against the persistence port.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Guarded Stock Update Flow                            │
//! │                                                                         │
//! │  User picks size + operation + amount, clicks Update                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  request_adjustment()                                                   │
//! │       │                                                                 │
//! │       ├── small change ──► save_stock() ──ok──► catalog updated,        │
//! │       │                        │               { status: "applied" }    │
//! │       │                        └─err──► state untouched, error verbatim │
//! │       │                                                                 │
//! │       └── large change ──► held in StockState,                          │
//! │                            { status: "pendingConfirmation",             │
//! │                              oldStock, newStock, delta }                │
//! │                                 │                                       │
//! │              confirm_adjustment()            cancel_adjustment()        │
//! │                                 │                     │                 │
//! │                            save_stock()          discarded, no          │
//! │                            ok → applied          mutation               │
//! │                            err → STILL PENDING (retry or cancel)        │
//! │                                                                         │
//! │  The in-memory catalog is only updated after the collaborator           │
//! │  confirmed the save. No retries here; one failure, one report.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ErrorCode, SessionError};
use crate::state::{CatalogState, StockState};
use crate::store::StockWriter;
use stockbook_core::input;
use stockbook_core::validation;
use stockbook_core::{StockAdjustment, StockMutation, StockOperation, Submission};

/// Outcome of an adjustment request, as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AdjustmentOutcome {
    /// Persisted immediately (small change) or after confirmation.
    #[serde(rename_all = "camelCase")]
    Applied { new_stock: i64 },

    /// Held for an explicit confirmation; nothing was persisted.
    #[serde(rename_all = "camelCase")]
    PendingConfirmation {
        old_stock: i64,
        new_stock: i64,
        delta: i64,
    },
}

/// Requests a stock adjustment for one size row.
///
/// Small changes are persisted immediately; large changes (more than 100
/// units, or more than half the old stock) are held and must be confirmed
/// with [`confirm_adjustment`]. A persistence failure leaves every piece
/// of state exactly as it was and surfaces the collaborator's error
/// verbatim.
pub async fn request_adjustment<W: StockWriter>(
    stock: &StockState,
    catalog: &CatalogState,
    writer: &W,
    variant_id: &str,
    size: &str,
    operation: StockOperation,
    raw_amount: &str,
) -> Result<AdjustmentOutcome, SessionError> {
    validation::validate_uuid(variant_id)?;

    let size_row = catalog
        .find_size(variant_id, size)
        .ok_or_else(|| SessionError::not_found("Size", size))?;

    let amount = input::parse_stock_amount(raw_amount);
    let mut adjustment =
        StockAdjustment::new(variant_id, &size_row.size, operation, amount, size_row.stock);

    debug!(
        variant_id = %variant_id,
        size = %size_row.size,
        ?operation,
        amount = %amount,
        old_stock = %size_row.stock,
        new_stock = %adjustment.new_stock(),
        "request_adjustment"
    );

    match adjustment.submit()? {
        Submission::NeedsConfirmation => {
            let outcome = AdjustmentOutcome::PendingConfirmation {
                old_stock: adjustment.old_stock,
                new_stock: adjustment.new_stock(),
                delta: adjustment.delta(),
            };
            info!(
                variant_id = %variant_id,
                delta = %adjustment.delta(),
                "large stock change held for confirmation"
            );
            stock.hold(adjustment);
            Ok(outcome)
        }
        Submission::Apply(mutation) => {
            // Failure propagates here with the adjustment still in Draft
            // and the catalog untouched
            writer.save_stock(&mutation).await?;
            adjustment.mark_applied();
            apply_to_catalog(catalog, &mutation);
            info!(variant_id = %variant_id, new_stock = %mutation.new_stock, "stock updated");
            Ok(AdjustmentOutcome::Applied {
                new_stock: mutation.new_stock,
            })
        }
    }
}

/// Confirms the held adjustment and persists it.
///
/// If the persistence call fails, the adjustment goes back into the
/// pending slot: the user can retry the confirmation or cancel it.
pub async fn confirm_adjustment<W: StockWriter>(
    stock: &StockState,
    catalog: &CatalogState,
    writer: &W,
) -> Result<AdjustmentOutcome, SessionError> {
    let mut adjustment = stock.take().ok_or_else(|| {
        SessionError::new(ErrorCode::BusinessLogic, "No stock adjustment is pending")
    })?;

    let mutation = adjustment.confirm()?;
    debug!(
        variant_id = %mutation.variant_id,
        size = %mutation.size,
        new_stock = %mutation.new_stock,
        "confirm_adjustment"
    );

    match writer.save_stock(&mutation).await {
        Ok(()) => {
            adjustment.mark_applied();
            apply_to_catalog(catalog, &mutation);
            info!(variant_id = %mutation.variant_id, new_stock = %mutation.new_stock, "stock updated");
            Ok(AdjustmentOutcome::Applied {
                new_stock: mutation.new_stock,
            })
        }
        Err(err) => {
            // Roll back: the adjustment is still PendingConfirmation
            stock.hold(adjustment);
            Err(err.into())
        }
    }
}

/// Cancels the held adjustment, if any. Nothing is mutated; returns
/// whether there was one to cancel.
pub fn cancel_adjustment(stock: &StockState) -> bool {
    match stock.take() {
        Some(adjustment) => {
            debug!(variant_id = %adjustment.variant_id, "stock adjustment cancelled");
            adjustment.cancel();
            true
        }
        None => false,
    }
}

/// Mirrors a confirmed mutation into the in-memory catalog.
fn apply_to_catalog(catalog: &CatalogState, mutation: &StockMutation) {
    if !catalog.set_stock(&mutation.variant_id, &mutation.size, mutation.new_stock) {
        // The catalog was reloaded between request and apply; the durable
        // store already has the value, the next fetch will converge.
        warn!(
            variant_id = %mutation.variant_id,
            size = %mutation.size,
            "applied stock mutation missing from in-memory catalog"
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
