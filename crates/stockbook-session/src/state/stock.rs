//! # Pending Stock-Adjustment Slot
//!
//! Holds the single in-flight stock adjustment of a session, if any.
//!
//! A session edits one size row at a time: requesting a new adjustment
//! while another is pending replaces it (the modal was re-opened), and
//! apply/cancel empty the slot. The slot never outlives the session.

use std::sync::{Arc, Mutex};

use stockbook_core::StockAdjustment;

/// Session-held pending adjustment, at most one at a time.
#[derive(Debug, Clone, Default)]
pub struct StockState {
    pending: Arc<Mutex<Option<StockAdjustment>>>,
}

impl StockState {
    /// Creates an empty slot.
    pub fn new() -> Self {
        StockState {
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Puts an adjustment into the slot, replacing any previous one.
    pub fn hold(&self, adjustment: StockAdjustment) {
        let mut guard = self.pending.lock().expect("Stock mutex poisoned");
        *guard = Some(adjustment);
    }

    /// Takes the pending adjustment out of the slot.
    pub fn take(&self) -> Option<StockAdjustment> {
        let mut guard = self.pending.lock().expect("Stock mutex poisoned");
        guard.take()
    }

    /// Whether an adjustment is waiting for confirmation.
    pub fn has_pending(&self) -> bool {
        let guard = self.pending.lock().expect("Stock mutex poisoned");
        guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::StockOperation;

    #[test]
    fn test_hold_take_cycle() {
        let state = StockState::new();
        assert!(!state.has_pending());

        state.hold(StockAdjustment::new(
            "v1",
            "XL",
            StockOperation::Add,
            51,
            50,
        ));
        assert!(state.has_pending());

        let taken = state.take().unwrap();
        assert_eq!(taken.variant_id, "v1");
        assert!(!state.has_pending());
        assert!(state.take().is_none());
    }
}
