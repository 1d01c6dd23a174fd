//! # Repository Module
//!
//! In-memory repositories for the back-office collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Kiosk Command                                                         │
//! │       │                                                                 │
//! │       │  store.menu_mut().toggle("grill-classic")                      │
//! │       ▼                                                                 │
//! │  MenuCatalog                                                           │
//! │  ├── add(&mut self, new_item)                                          │
//! │  ├── update(&mut self, id, patch)                                      │
//! │  ├── remove(&mut self, id)                                             │
//! │  └── toggle(&mut self, id)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<AdminMenuItem> (insertion order preserved)                        │
//! │                                                                         │
//! │  Unknown ids never error: mutations report `false` / `None`            │
//! │  and leave the collection exactly as it was.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MenuCatalog`](menu::MenuCatalog) - Menu items and their `active` flag
//! - [`OrderBook`](orders::OrderBook) - Orders and the status workflow
//! - [`UserDirectory`](users::UserDirectory) - Staff accounts

pub mod menu;
pub mod orders;
pub mod users;
