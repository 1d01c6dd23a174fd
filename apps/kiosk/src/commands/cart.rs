//! # Cart Commands
//!
//! Commands for the customer's cart.
//!
//! ## Cart Drawer
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Seu Pedido                                        3 itens     │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Grill Classic              x2              R$ 57,80           │
//! │  Batata Frita Clássica      x1              R$ 16,90           │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Total                                      R$ 74,70           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use grill_core::validation::validate_cart_quantity;
use grill_core::{Cart, CartItem, CartTotals};

use crate::error::ApiError;
use crate::state::{AdminState, CartState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a menu item.
///
/// Only items currently on the storefront can be added; the item is
/// copied into the cart as it is right now. A line already holding
/// [`MAX_CART_QUANTITY`](grill_core::validation::MAX_CART_QUANTITY) units
/// is left as it is and the add is rejected.
pub fn add_to_cart(cart: &CartState, admin: &AdminState, item_id: &str) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = admin
        .with_store(|s| {
            s.menu()
                .get(item_id)
                .filter(|i| i.active)
                .map(|i| i.item.clone())
        })
        .ok_or_else(|| ApiError::not_found("Menu item", item_id))?;

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        let held = c.get(item_id).map_or(0, |line| line.quantity);
        validate_cart_quantity(held.saturating_add(1))?;
        c.add_item(&item);
        Ok(CartResponse::from(&*c))
    })
}

/// Sets the quantity of a cart line. Zero or less removes it; more than
/// [`MAX_CART_QUANTITY`](grill_core::validation::MAX_CART_QUANTITY) is
/// rejected without touching the cart.
pub fn update_cart_item(cart: &CartState, item_id: &str, quantity: i64) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %quantity, "update_cart_item command");
    let quantity = validate_cart_quantity(quantity)?;

    Ok(cart.with_cart_mut(|c| {
        c.update_quantity(item_id, quantity);
        CartResponse::from(&*c)
    }))
}

pub fn remove_from_cart(cart: &CartState, item_id: &str) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");
    cart.with_cart_mut(|c| {
        c.remove_item(item_id);
        CartResponse::from(&*c)
    })
}

pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::menu::toggle_menu_item;
    use crate::error::ErrorCode;
    use grill_core::validation::MAX_CART_QUANTITY;

    #[test]
    fn test_cart_scenario_totals() {
        let cart = CartState::new();
        let admin = AdminState::demo();

        add_to_cart(&cart, &admin, "grill-classic").unwrap();
        add_to_cart(&cart, &admin, "grill-classic").unwrap();
        let response = add_to_cart(&cart, &admin, "batata-frita").unwrap();

        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.total_items, 3);
        assert_eq!(response.totals.total.to_string(), "R$ 74,70");
    }

    #[test]
    fn test_update_to_zero_removes() {
        let cart = CartState::new();
        let admin = AdminState::demo();
        add_to_cart(&cart, &admin, "onion-rings").unwrap();

        let response = update_cart_item(&cart, "onion-rings", 0).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_items, 0);
    }

    #[test]
    fn test_cannot_add_hidden_or_unknown_item() {
        let cart = CartState::new();
        let admin = AdminState::demo();
        toggle_menu_item(&admin, "suco-detox").unwrap();

        assert_eq!(add_to_cart(&cart, &admin, "suco-detox").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(add_to_cart(&cart, &admin, "nope").unwrap_err().code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_quantity_above_limit_is_rejected() {
        let cart = CartState::new();
        let admin = AdminState::demo();
        add_to_cart(&cart, &admin, "grill-classic").unwrap();

        let err = update_cart_item(&cart, "grill-classic", i64::MAX).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("quantity"));

        let response = get_cart(&cart);
        assert_eq!(response.totals.total_items, 1);
        assert_eq!(response.totals.total.to_string(), "R$ 28,90");
    }

    #[test]
    fn test_add_stops_at_limit() {
        let cart = CartState::new();
        let admin = AdminState::demo();
        add_to_cart(&cart, &admin, "grill-classic").unwrap();

        let response = update_cart_item(&cart, "grill-classic", MAX_CART_QUANTITY).unwrap();
        assert_eq!(response.totals.total_items, MAX_CART_QUANTITY);

        let err = add_to_cart(&cart, &admin, "grill-classic").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart).totals.total_items, MAX_CART_QUANTITY);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let cart = CartState::new();
        let admin = AdminState::demo();
        add_to_cart(&cart, &admin, "coca-cola-350").unwrap();

        let response = remove_from_cart(&cart, "nope");
        assert_eq!(response.items.len(), 1);

        assert!(clear_cart(&cart).items.is_empty());
    }
}
