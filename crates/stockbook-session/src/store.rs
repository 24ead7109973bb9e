//! # Persistence Port
//!
//! The boundary to the external persistence collaborator.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Boundary                                 │
//! │                                                                         │
//! │  service::stock ──► StockWriter::save_stock(&mutation) ──► network ──► │
//! │                                                            external     │
//! │                                                            data layer   │
//! │                                                                         │
//! │  The actual store (relational schema, ORM, HTTP API) is an external    │
//! │  collaborator outside this workspace. The session layer only needs    │
//! │  "persist {variant_id, size, new_stock}, tell me if it worked" - so   │
//! │  that is the whole port. Tests plug in an in-memory fake.              │
//! │                                                                         │
//! │  Failure contract: a StoreError means NOTHING was persisted. The      │
//! │  caller leaves in-memory state untouched and surfaces the error        │
//! │  verbatim. No retries at this layer.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use stockbook_core::StockMutation;
use thiserror::Error;

/// Persistence collaborator failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collaborator rejected or failed the save.
    #[error("persistence call failed: {0}")]
    SaveFailed(String),

    /// The collaborator could not be reached at all.
    #[error("persistence collaborator unreachable: {0}")]
    Unreachable(String),
}

/// Port for persisting finalized stock mutations.
///
/// Implemented by the embedding application (typically an HTTP client to
/// the data layer); tests use an in-memory fake.
#[async_trait]
pub trait StockWriter: Send + Sync {
    /// Persists one stock mutation. Must be atomic: either the new stock
    /// value is durable on return, or a [`StoreError`] is returned and
    /// nothing changed.
    async fn save_stock(&self, mutation: &StockMutation) -> Result<(), StoreError>;
}
