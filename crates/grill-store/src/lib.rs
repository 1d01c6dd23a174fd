//! # grill-store: In-Memory Admin Store for Grill Point
//!
//! The back-office state: five independent collections, each with its own
//! mutation operations, plus a pristine copy of the demo seed for resets.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grill Point Data Flow                            │
//! │                                                                         │
//! │  Kiosk command (advance_order)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   grill-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   AdminStore                                                    │   │
//! │  │   ├── menu()      ──► MenuCatalog    (add/update/remove/toggle) │   │
//! │  │   ├── settings()  ──► StoreSettings  (update_store)             │   │
//! │  │   ├── orders()    ──► OrderBook      (update_status/advance)    │   │
//! │  │   ├── users()     ──► UserDirectory  (add/update/remove)        │   │
//! │  │   ├── theme()     ──► Theme          (set/toggle)               │   │
//! │  │   └── reset_demo()──► everything back to the seed               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  process memory (gone on restart)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Every operation is total. Unknown ids leave the store untouched and are
//! reported through `bool`/`Option` returns, never through errors.
//!
//! ## Usage
//!
//! ```rust
//! use grill_store::AdminStore;
//!
//! let mut store = AdminStore::demo();
//! store.orders_mut().advance("PED-001");
//! assert_eq!(store.orders().get("PED-001").map(|o| o.status.as_str()), Some("preparing"));
//!
//! store.reset_demo();
//! assert_eq!(store.orders().get("PED-001").map(|o| o.status.as_str()), Some("received"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod ids;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds};
pub use seed::AdminSnapshot;
pub use store::AdminStore;

// Repository re-exports for convenience
pub use repository::menu::MenuCatalog;
pub use repository::orders::OrderBook;
pub use repository::users::UserDirectory;
