//! # Admin State
//!
//! The back-office store behind a mutex. One instance is shared by every
//! admin command and by the storefront menu listing.

use std::sync::{Arc, Mutex, PoisonError};

use grill_store::AdminStore;

/// Shared admin store.
#[derive(Debug, Clone)]
pub struct AdminState {
    store: Arc<Mutex<AdminStore>>,
}

impl AdminState {
    pub fn new(store: AdminStore) -> Self {
        AdminState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// The store filled with demo data.
    pub fn demo() -> Self {
        Self::new(AdminStore::demo())
    }

    /// Runs `f` with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AdminStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Runs `f` with write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use grill_kiosk_lib::state::AdminState;
    ///
    /// let admin = AdminState::demo();
    /// let next = admin.with_store_mut(|s| s.orders_mut().advance("PED-001"));
    /// assert_eq!(next.map(|s| s.as_str()), Some("preparing"));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AdminStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::demo()
    }
}
