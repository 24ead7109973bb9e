//! # Service Module
//!
//! All service functions exposed to the web frontend.
//!
//! ## Service Organization
//! ```text
//! service/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Search, browse, size-list edit
//! ├── order.rs    ◄─── Order/purchase draft manipulation
//! └── stock.rs    ◄─── Guarded stock adjustment flow
//! ```
//!
//! ## How Services Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Service Call Flow                                    │
//! │                                                                         │
//! │  Web Frontend                                                           │
//! │  ────────────                                                           │
//! │  const snapshot = await api.setItemQuantity({                           │
//! │    variantId: 'xxx',                                                    │
//! │    quantity: '7'          ◄── raw form string, coerced server-side      │
//! │  });                                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Session Layer                                                          │
//! │  ─────────────                                                          │
//! │  pub fn set_item_quantity(                                              │
//! │      order: &OrderState,      ◄── injected state                        │
//! │      variant_id: &str,                                                  │
//! │      raw_quantity: &str,      ◄── coerced via input::parse_quantity     │
//! │  ) -> Result<OrderSnapshot, SessionError>                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Frontend receives: { items: [...], totals: {...} } (camelCase)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each service declares exactly the state it needs; only the stock flow
//! additionally takes the persistence port.

pub mod catalog;
pub mod order;
pub mod stock;
