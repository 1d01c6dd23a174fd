//! # Cart
//!
//! The customer's in-progress selection.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Customer Action          Method                  Cart Change           │
//! │  ───────────────          ──────                  ───────────           │
//! │                                                                         │
//! │  Tap "Adicionar" ────────► add_item(item) ──────► qty += 1 or push      │
//! │                                                                         │
//! │  + / - in drawer ────────► update_quantity(id,n) ► qty = n (n ≤ 0: drop)│
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item(id) ─────► entry dropped         │
//! │                                                                         │
//! │  Order sent ─────────────► clear() ─────────────► empty                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these can fail. Totals are recomputed on every read and saturate
//! instead of overflowing; quantity and price limits live in
//! [`crate::validation`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::MenuItem;

/// An entry in the cart: a copy of the menu item plus a quantity.
///
/// The item is copied when first added, so later catalog edits do not
/// change what the customer already picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,

    /// Always ≥ 1 while the entry exists.
    pub quantity: i64,
}

impl CartItem {
    #[inline]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - One entry per distinct menu item id
/// - Every quantity is positive; reaching zero removes the entry
/// - Entries keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of `item`.
    ///
    /// An existing entry with the same id gets its quantity bumped; otherwise
    /// a new entry with quantity 1 is appended.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(entry) = self.items.iter_mut().find(|i| i.item.id == item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            item: item.clone(),
            quantity: 1,
        });
    }

    /// Drops the entry with this id, if any.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.item.id != id);
    }

    /// Sets an entry's quantity to exactly `quantity`.
    ///
    /// `quantity ≤ 0` behaves like [`Cart::remove_item`]. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(entry) = self.items.iter_mut().find(|i| i.item.id == id) {
            entry.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.item.id == id)
    }

    /// Number of distinct entries.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities (the badge on the cart icon).
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of price × quantity over all entries.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_items: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            total: cart.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn menu_item(id: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price: Money::from_cents(price_cents),
            category: Category::Burgers,
            image: String::new(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 2890));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.get("a").map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_repeated_adds_count_up() {
        let mut cart = Cart::new();
        let item = menu_item("a", 2890);
        for _ in 0..7 {
            cart.add_item(&item);
        }

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 7);
        assert_eq!(cart.total(), Money::from_cents(2890) * 7);
    }

    #[test]
    fn test_two_burgers_and_fries_scenario() {
        let mut cart = Cart::new();
        let burger = menu_item("grill-classic", 2890);
        let fries = menu_item("batata-frita", 1690);

        cart.add_item(&burger);
        cart.add_item(&burger);
        cart.add_item(&fries);

        assert_eq!(cart.total(), Money::from_reais(74, 70));
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total().to_string(), "R$ 74,70");
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 1000));
        cart.add_item(&menu_item("a", 1000));

        cart.update_quantity("a", 5);
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity("missing", 3);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_to_zero_matches_remove() {
        let mut base = Cart::new();
        base.add_item(&menu_item("a", 1000));
        base.add_item(&menu_item("b", 500));

        let mut via_update = base.clone();
        via_update.update_quantity("a", 0);

        let mut via_negative = base.clone();
        via_negative.update_quantity("a", -4);

        let mut via_remove = base;
        via_remove.remove_item("a");

        assert_eq!(via_update, via_remove);
        assert_eq!(via_negative, via_remove);
        assert!(via_remove.get("a").is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 1000));
        let before = cart.clone();

        cart.remove_item("nope");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 999));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_added_item_is_a_snapshot() {
        let mut cart = Cart::new();
        let mut item = menu_item("a", 1000);
        cart.add_item(&item);

        item.price = Money::from_cents(5000);
        cart.add_item(&item);

        // the first copy's price wins
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_huge_quantity_saturates_instead_of_panicking() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 2890));
        cart.add_item(&menu_item("b", 1690));

        cart.update_quantity("a", i64::MAX);
        cart.add_item(&menu_item("a", 2890));

        assert_eq!(cart.get("a").map(|i| i.quantity), Some(i64::MAX));
        assert_eq!(cart.total_items(), i64::MAX);
        assert_eq!(cart.total(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item("a", 790));
        cart.add_item(&menu_item("a", 790));
        cart.add_item(&menu_item("b", 1490));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total.cents(), 3070);
    }
}
