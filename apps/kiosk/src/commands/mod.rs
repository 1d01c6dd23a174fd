//! # Commands Module
//!
//! One function per user action. The shell parses a line and calls exactly
//! one of these.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kiosk Commands                                     │
//! │                                                                         │
//! │  Storefront                   Admin                                    │
//! │  ──────────                   ─────                                    │
//! │  menu::list_menu              menu::list_admin_menu / add / edit /     │
//! │  cart::get_cart                     remove / toggle                    │
//! │  cart::add_to_cart            store::get_store / edit_store            │
//! │  cart::update_cart_item       orders::list / get / advance /           │
//! │  cart::remove_from_cart              set_status                        │
//! │  cart::clear_cart             users::list / add / edit / remove        │
//! │  checkout::checkout           dashboard::get_dashboard                 │
//! │                               settings::theme / reset / backup /       │
//! │                                        config                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Commands take only the state containers they need
//! - Form input is validated here, never inside the store
//! - An id the store does not know becomes `ErrorCode::NotFound`

pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod menu;
pub mod orders;
pub mod settings;
pub mod store;
pub mod users;
