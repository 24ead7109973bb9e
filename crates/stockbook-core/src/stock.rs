//! # Stock Adjustment Guard
//!
//! Validates and previews stock-quantity mutations, holding "large" changes
//! for an explicit confirmation step before anything is persisted.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Stock Adjustment Lifecycle                              │
//! │                                                                         │
//! │                      ┌─────────┐                                        │
//! │        new() ──────► │  Draft  │                                        │
//! │                      └────┬────┘                                        │
//! │                           │ submit()                                    │
//! │              ┌────────────┴────────────┐                                │
//! │       small change               large change                           │
//! │              │                         │                                │
//! │              ▼                         ▼                                │
//! │      Submission::Apply      ┌─────────────────────┐                     │
//! │      (persist now)          │ PendingConfirmation │                     │
//! │              │              └──────────┬──────────┘                     │
//! │              │                confirm()│        cancel() ──► discarded  │
//! │              │                         ▼                    (no change) │
//! │              │              Submission mutation                         │
//! │              │                         │                                │
//! │              ▼                         ▼                                │
//! │        external persistence call succeeds?                              │
//! │              │ yes: mark_applied()     │ no: state UNCHANGED            │
//! │              ▼                         ▼                                │
//! │         ┌─────────┐          still Draft / PendingConfirmation          │
//! │         │ Applied │          (rollback by construction - the machine    │
//! │         └─────────┘           only advances on confirmed success)       │
//! │                                                                         │
//! │  Applied is terminal; the request object is discarded afterwards.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Large-Change Rule
//! A change is "large" when `|new − old| > 100` units, OR it exceeds 50% of
//! the old stock (strict), OR the old stock was 0 and the new is not
//! (treated as a 100% change). Exactly 50% does NOT trigger; exactly 100
//! units does NOT trigger. All integer math, no floats.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::{LARGE_CHANGE_ABSOLUTE_UNITS, LARGE_CHANGE_PERCENT};

// =============================================================================
// Operations and States
// =============================================================================

/// How the entered amount combines with the existing stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockOperation {
    /// Replace the stock with the amount.
    Set,
    /// Increase the stock by the amount.
    Add,
    /// Decrease the stock by the amount (floored at 0).
    Subtract,
}

/// Lifecycle state of one adjustment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentState {
    Draft,
    PendingConfirmation,
    Applied,
}

/// What a submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Small change: hand this to the persistence collaborator now.
    Apply(StockMutation),
    /// Large change: held; an explicit `confirm()` must follow.
    NeedsConfirmation,
}

/// The outcome handed to the external persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockMutation {
    pub variant_id: String,
    pub size: String,
    pub new_stock: i64,
}

// =============================================================================
// Pure Helpers
// =============================================================================

/// Resolves the stock an operation would produce. Never negative.
pub fn compute_new_stock(operation: StockOperation, old_stock: i64, amount: i64) -> i64 {
    match operation {
        StockOperation::Set => amount,
        StockOperation::Add => old_stock + amount,
        StockOperation::Subtract => (old_stock - amount).max(0),
    }
}

/// The large-change predicate gating the confirmation step.
pub fn is_large_change(old_stock: i64, new_stock: i64) -> bool {
    let delta = (new_stock - old_stock).abs();

    if delta > LARGE_CHANGE_ABSOLUTE_UNITS {
        return true;
    }

    if old_stock == 0 {
        // Any change from zero counts as a 100% change
        return new_stock != 0;
    }

    // delta / old > 50% (strict), in integer math
    delta * 100 > old_stock * LARGE_CHANGE_PERCENT
}

// =============================================================================
// Adjustment Request
// =============================================================================

/// A transient stock-adjustment request. Created when the user asks for an
/// update, discarded after apply or cancel; it has no persistence of its
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockAdjustment {
    pub variant_id: String,
    pub size: String,
    pub operation: StockOperation,
    /// Entered amount; coerced to >= 0 at the input boundary, re-clamped
    /// here so the machine cannot be constructed into an invalid range.
    pub amount: i64,
    /// Stock on record when the request was created.
    pub old_stock: i64,
    state: AdjustmentState,
}

impl StockAdjustment {
    /// Creates a new request in `Draft`.
    pub fn new(
        variant_id: &str,
        size: &str,
        operation: StockOperation,
        amount: i64,
        old_stock: i64,
    ) -> Self {
        StockAdjustment {
            variant_id: variant_id.to_string(),
            size: size.to_string(),
            operation,
            amount: amount.max(0),
            old_stock: old_stock.max(0),
            state: AdjustmentState::Draft,
        }
    }

    /// The stock this request resolves to.
    pub fn new_stock(&self) -> i64 {
        compute_new_stock(self.operation, self.old_stock, self.amount)
    }

    /// Signed unit change the request would make.
    pub fn delta(&self) -> i64 {
        self.new_stock() - self.old_stock
    }

    /// Whether this request trips the large-change guard.
    pub fn is_large_change(&self) -> bool {
        is_large_change(self.old_stock, self.new_stock())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AdjustmentState {
        self.state
    }

    /// The mutation to hand to the persistence collaborator.
    pub fn mutation(&self) -> StockMutation {
        StockMutation {
            variant_id: self.variant_id.clone(),
            size: self.size.clone(),
            new_stock: self.new_stock(),
        }
    }

    /// Submits the draft. Large changes move to `PendingConfirmation` and
    /// wait; small changes stay in `Draft` and return the mutation to
    /// persist immediately.
    ///
    /// The state only advances to `Applied` via [`StockAdjustment::mark_applied`],
    /// after the persistence call succeeded. A failed call therefore leaves
    /// the machine exactly where it was (`Draft` here) - rollback by
    /// construction, and the failure is surfaced by the caller.
    pub fn submit(&mut self) -> CoreResult<Submission> {
        if self.state != AdjustmentState::Draft {
            return Err(self.invalid_state());
        }

        if self.is_large_change() {
            self.state = AdjustmentState::PendingConfirmation;
            Ok(Submission::NeedsConfirmation)
        } else {
            Ok(Submission::Apply(self.mutation()))
        }
    }

    /// Confirms a held request, returning the mutation to persist. The
    /// state stays `PendingConfirmation` until [`StockAdjustment::mark_applied`];
    /// a failed persistence call leaves it confirmable (or cancellable)
    /// again.
    pub fn confirm(&mut self) -> CoreResult<StockMutation> {
        if self.state != AdjustmentState::PendingConfirmation {
            return Err(self.invalid_state());
        }
        Ok(self.mutation())
    }

    /// Discards the request without mutating anything. Valid from `Draft`
    /// and `PendingConfirmation`; consuming the value makes the discard
    /// final.
    pub fn cancel(self) {}

    /// Marks the request applied after the persistence collaborator
    /// confirmed success. Terminal.
    pub fn mark_applied(&mut self) {
        self.state = AdjustmentState::Applied;
    }

    fn invalid_state(&self) -> CoreError {
        CoreError::InvalidAdjustmentState {
            current: format!("{:?}", self.state),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
