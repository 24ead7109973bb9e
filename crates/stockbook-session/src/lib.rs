//! # Stockbook Session Library
//!
//! The stateful session layer of Stockbook: everything one browser session
//! holds in memory, and the service functions the web frontend calls on
//! every form event.
//!
//! ## Module Organization
//! ```text
//! stockbook_session/
//! ├── lib.rs          ◄─── You are here (module graph, tracing init)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product catalog state
//! │   ├── order.rs    ◄─── Order/purchase draft state
//! │   ├── stock.rs    ◄─── Pending stock-adjustment slot
//! │   └── config.rs   ◄─── Configuration state
//! ├── service/
//! │   ├── mod.rs      ◄─── Service exports
//! │   ├── catalog.rs  ◄─── Search / browse / size-list edit
//! │   ├── order.rs    ◄─── Draft manipulation + totals snapshots
//! │   └── stock.rs    ◄─── Guarded stock adjustment flow
//! ├── store.rs        ◄─── Persistence port (StockWriter) + StoreError
//! └── error.rs        ◄─── SessionError for the rendering layer
//! ```
//!
//! ## Execution Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Execution Model                              │
//! │                                                                         │
//! │  Single UI session, event-driven. Every service call:                   │
//! │                                                                         │
//! │  form event ──► coerce numeric input (input module, clamps)            │
//! │             ──► validate structure (validation module, typed errors)    │
//! │             ──► mutate state under the Mutex                            │
//! │             ──► re-derive totals / ranking (pure, never stale)          │
//! │             ──► return a camelCase DTO                                  │
//! │                                                                         │
//! │  The ONLY suspension point is the external persistence collaborator    │
//! │  (StockWriter). Core computations never await. Cross-session conflicts │
//! │  are resolved last-write-wins by the external layer, not here.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod service;
pub mod state;
pub mod store;

use tracing_subscriber::EnvFilter;

pub use error::{ErrorCode, SessionError};
pub use state::{CatalogState, ConfigState, OrderState, StockState};
pub use store::{StockWriter, StoreError};

/// Initializes the tracing subscriber for structured logging.
///
/// Called once by the embedding application at startup.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockbook=trace` - Show trace for stockbook crates only
/// - Default: INFO level, debug for the stockbook crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockbook=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
