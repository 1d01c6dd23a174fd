//! # grill-core: Pure Ordering Logic for Grill Point
//!
//! The storefront (menu, cart, checkout) and the back-office panel (menu
//! CRUD, store settings, order tracking, users, dashboard) both sit on top of
//! the types and rules in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grill Point Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Kiosk shell (apps/kiosk)                     │   │
//! │  │    menu ──► add ──► cart ──► checkout ──► WhatsApp link         │   │
//! │  │    orders ──► advance        dashboard        users             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               grill-store (in-memory admin store)               │   │
//! │  │    MenuCatalog • StoreSettings • OrderBook • UserDirectory      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grill-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   types • money • cart • status • checkout • patch • stats     │   │
//! │  │   validation                                                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu items, orders, store settings, users
//! - [`money`] - Integer centavo amounts with `R$` formatting
//! - [`cart`] - The customer's in-progress selection
//! - [`status`] - Order status workflow (`received → preparing → delivering → done`)
//! - [`checkout`] - Order summary message and WhatsApp hand-off link
//! - [`patch`] - Typed partial updates for menu items, settings and users
//! - [`stats`] - Dashboard numbers
//! - [`validation`] - Form validation used before calling into the store
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grill_core::{Cart, Category, MenuItem, Money};
//!
//! let classic = MenuItem {
//!     id: "grill-classic".to_string(),
//!     name: "Grill Classic".to_string(),
//!     description: String::new(),
//!     price: Money::from_cents(2890),
//!     category: Category::Burgers,
//!     image: String::new(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&classic);
//! cart.add_item(&classic);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total().to_string(), "R$ 57,80");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod patch;
pub mod stats;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use checkout::{OrderSummary, WhatsAppLink};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use patch::{MenuItemPatch, StorePatch, UserPatch};
pub use stats::{DashboardStats, SalesPoint};
pub use status::OrderStatus;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of orders shown in the dashboard's "recent orders" table.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Destination used when no WhatsApp number is configured.
pub const DEFAULT_WHATSAPP_PHONE: &str = "5511999999999";
