//! # Cart State
//!
//! The customer's cart behind a mutex.
//!
//! The cart itself (items, quantities, totals) lives in `grill_core::cart`;
//! this wrapper only adds shared ownership.

use std::sync::{Arc, Mutex, PoisonError};

use grill_core::Cart;

/// Shared cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`. Cart operations are short and almost all of
/// them write, so a plain mutex is enough.
///
/// A panic while the lock is held cannot leave the cart half-updated (every
/// cart operation is a single `Vec` edit), so a poisoned lock is recovered
/// instead of propagated.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates an empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use grill_core::CartTotals;
    /// use grill_kiosk_lib::state::CartState;
    ///
    /// let state = CartState::new();
    /// let totals = state.with_cart(|c| CartTotals::from(c));
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Runs `f` with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
