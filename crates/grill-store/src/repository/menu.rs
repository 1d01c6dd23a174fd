//! # Menu Catalog
//!
//! Every menu item, active or not. The storefront only ever sees
//! [`MenuCatalog::active`]; the admin panel sees [`MenuCatalog::list`].

use std::sync::Arc;

use tracing::debug;

use grill_core::{AdminMenuItem, MenuItemPatch, NewMenuItem};

use crate::ids::IdGenerator;

/// Repository for menu items.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use grill_core::{Category, Money, NewMenuItem};
/// use grill_store::{MenuCatalog, SequentialIds};
///
/// let mut menu = MenuCatalog::new(Vec::new(), Arc::new(SequentialIds::new()));
/// let id = menu.add(NewMenuItem {
///     name: "Smash Junior".into(),
///     description: String::new(),
///     price: Money::from_cents(1990),
///     category: Category::Burgers,
///     image: String::new(),
/// });
///
/// assert_eq!(menu.toggle(&id), Some(false));
/// assert!(menu.active().next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<AdminMenuItem>,
    ids: Arc<dyn IdGenerator>,
}

impl MenuCatalog {
    pub fn new(items: Vec<AdminMenuItem>, ids: Arc<dyn IdGenerator>) -> Self {
        MenuCatalog { items, ids }
    }

    /// Adds an item under a freshly generated id. New items start active.
    ///
    /// Returns the assigned id.
    pub fn add(&mut self, new_item: NewMenuItem) -> String {
        let mut id = self.ids.menu_item_id();
        while self.get(&id).is_some() {
            id = self.ids.menu_item_id();
        }

        debug!(id = %id, name = %new_item.name, "Adding menu item");

        self.items
            .push(AdminMenuItem::active(new_item.with_id(id.clone())));
        id
    }

    /// Merges `patch` into the item. Returns `false` for an unknown id.
    pub fn update(&mut self, id: &str, patch: &MenuItemPatch) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                debug!(id = %id, "Updating menu item");
                patch.apply_to(item);
                true
            }
            None => {
                debug!(id = %id, "Update skipped, no such menu item");
                false
            }
        }
    }

    /// Deletes the item. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        let removed = self.items.len() != before;

        debug!(id = %id, removed, "Removing menu item");
        removed
    }

    /// Flips the `active` flag and returns the new value.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self.get_mut(id)?;
        item.active = !item.active;

        debug!(id = %id, active = item.active, "Toggled menu item");
        Some(item.active)
    }

    /// The full catalog in insertion order.
    pub fn list(&self) -> &[AdminMenuItem] {
        &self.items
    }

    /// Items shown on the public storefront.
    pub fn active(&self) -> impl Iterator<Item = &AdminMenuItem> {
        self.items.iter().filter(|i| i.active)
    }

    pub fn get(&self, id: &str) -> Option<&AdminMenuItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut AdminMenuItem> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    pub(crate) fn replace_all(&mut self, items: Vec<AdminMenuItem>) {
        self.items = items;
    }
}
