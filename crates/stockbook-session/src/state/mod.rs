//! # State Module
//!
//! Manages the in-memory state of one UI session.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Service Signatures**: Services declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │  OrderState  │ │  StockState  │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  store name  │   │
//! │  │   Vec<       │ │   OrderDraft │ │   Option<    │ │  currency    │   │
//! │  │   Product>>> │ │  >>          │ │   StockAdj.  │ │  default GST │   │
//! │  │              │ │              │ │  >>>         │ │  (read-only) │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutex wrappers give exclusive access per service call               │
//! │  • One session owns its state exclusively - there is no cross-session  │
//! │    sharing, so no further coordination is needed                       │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod order;
mod stock;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use order::{OrderDraft, OrderState};
pub use stock::StockState;
