//! # Admin Store
//!
//! Owns the five collections and the seed they were created from.
//!
//! ## Reset
//! ```text
//! ┌──────────────┐   reset_demo()   ┌──────────────────────────────────────┐
//! │ AdminSnapshot│ ───────────────► │ menu · settings · orders · users ·   │
//! │ (pristine)   │   clone each     │ theme                                │
//! └──────────────┘                  └──────────────────────────────────────┘
//! ```
//! The seed is never mutated, so any number of resets yield values
//! deep-equal to it.

use std::sync::Arc;

use tracing::{debug, info};

use grill_core::{DashboardStats, StorePatch, StoreSettings, Theme};

use crate::ids::{Clock, IdGenerator, SystemClock, UuidIds};
use crate::repository::menu::MenuCatalog;
use crate::repository::orders::OrderBook;
use crate::repository::users::UserDirectory;
use crate::seed::AdminSnapshot;

/// The back-office state container.
///
/// An explicitly owned value: whoever needs it gets it passed in.
#[derive(Debug, Clone)]
pub struct AdminStore {
    menu: MenuCatalog,
    settings: StoreSettings,
    orders: OrderBook,
    users: UserDirectory,
    theme: Theme,
    seed: AdminSnapshot,
}

impl AdminStore {
    /// Creates a store populated from `seed`.
    pub fn new(seed: AdminSnapshot, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        let data = seed.clone();
        AdminStore {
            menu: MenuCatalog::new(data.menu, Arc::clone(&ids)),
            settings: data.settings,
            orders: OrderBook::new(data.orders),
            users: UserDirectory::new(data.users, ids, clock),
            theme: data.theme,
            seed,
        }
    }

    /// The demo store with UUID ids and the system clock.
    pub fn demo() -> Self {
        Self::new(AdminSnapshot::demo(), Arc::new(UuidIds), Arc::new(SystemClock))
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuCatalog {
        &mut self.menu
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderBook {
        &mut self.orders
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserDirectory {
        &mut self.users
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Merges `patch` into the settings record. Nothing is validated.
    pub fn update_store(&mut self, patch: &StorePatch) {
        debug!(?patch, "Updating store settings");
        patch.apply_to(&mut self.settings);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(?theme, "Setting theme");
        self.theme = theme;
    }

    /// Switches dark/light and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    // =========================================================================
    // Whole-Store Operations
    // =========================================================================

    /// Restores every collection to its seeded value.
    pub fn reset_demo(&mut self) {
        let seed = self.seed.clone();
        self.menu.replace_all(seed.menu);
        self.settings = seed.settings;
        self.orders.replace_all(seed.orders);
        self.users.replace_all(seed.users);
        self.theme = seed.theme;

        info!("Admin store reset to demo data");
    }

    /// A copy of the current state of all five collections.
    pub fn snapshot(&self) -> AdminSnapshot {
        AdminSnapshot {
            menu: self.menu.list().to_vec(),
            settings: self.settings.clone(),
            orders: self.orders.list().to_vec(),
            users: self.users.list().to_vec(),
            theme: self.theme,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.menu.list(), self.orders.list())
    }
}

impl Default for AdminStore {
    fn default() -> Self {
        Self::demo()
    }
}
