//! # Menu Commands
//!
//! The storefront listing and the admin catalog page.
//!
//! | Page        | Shows           | Search matches        | Category filter |
//! |-------------|-----------------|-----------------------|-----------------|
//! | Storefront  | active items    | name or description   | yes             |
//! | Admin menu  | every item      | name                  | yes             |

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use grill_core::validation::{validate_display_name, validate_price};
use grill_core::{AdminMenuItem, Category, MenuItem, MenuItemPatch, NewMenuItem};

use crate::error::ApiError;
use crate::state::AdminState;

/// One row of the admin catalog table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    #[serde(flatten)]
    pub item: AdminMenuItem,
    pub category_label: &'static str,
    /// Price as the edit form shows it (`"28.90"`).
    pub price_input: String,
}

impl From<&AdminMenuItem> for CatalogRow {
    fn from(item: &AdminMenuItem) -> Self {
        CatalogRow {
            category_label: item.item.category.label(),
            price_input: item.item.price.decimal(),
            item: item.clone(),
        }
    }
}

/// Optional filters for a menu listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring.
    pub search: Option<String>,
}

impl MenuFilter {
    pub fn new(category: Option<Category>, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        MenuFilter { category, search }
    }

    fn category_matches(&self, item: &MenuItem) -> bool {
        self.category.map_or(true, |c| item.category == c)
    }

    fn storefront_matches(&self, item: &MenuItem) -> bool {
        self.category_matches(item)
            && self.search.as_deref().map_or(true, |q| {
                item.name.to_lowercase().contains(q) || item.description.to_lowercase().contains(q)
            })
    }

    fn admin_matches(&self, item: &MenuItem) -> bool {
        self.category_matches(item)
            && self
                .search
                .as_deref()
                .map_or(true, |q| item.name.to_lowercase().contains(q))
    }
}

/// Storefront menu: active items only.
pub fn list_menu(admin: &AdminState, filter: &MenuFilter) -> Vec<MenuItem> {
    debug!(?filter, "list_menu command");
    admin.with_store(|s| {
        s.menu()
            .active()
            .map(|i| &i.item)
            .filter(|i| filter.storefront_matches(i))
            .cloned()
            .collect()
    })
}

/// Admin catalog, including inactive items.
pub fn list_admin_menu(admin: &AdminState, filter: &MenuFilter) -> Vec<CatalogRow> {
    debug!(?filter, "list_admin_menu command");
    admin.with_store(|s| {
        s.menu()
            .list()
            .iter()
            .filter(|i| filter.admin_matches(&i.item))
            .map(CatalogRow::from)
            .collect()
    })
}

/// Adds an item. The name must not be blank and the price must be in range.
pub fn add_menu_item(admin: &AdminState, mut new_item: NewMenuItem) -> Result<AdminMenuItem, ApiError> {
    new_item.name = validate_display_name(&new_item.name)?;
    new_item.price = validate_price(new_item.price)?;
    new_item.description = new_item.description.trim().to_string();

    let item = admin.with_store_mut(|s| {
        let id = s.menu_mut().add(new_item);
        s.menu().get(&id).cloned()
    });

    let item = item.ok_or_else(|| ApiError::internal("Added menu item is missing"))?;
    info!(id = %item.id(), name = %item.item.name, "Menu item added");
    Ok(item)
}

/// Applies `patch` to an existing item.
pub fn edit_menu_item(
    admin: &AdminState,
    id: &str,
    mut patch: MenuItemPatch,
) -> Result<AdminMenuItem, ApiError> {
    debug!(id = %id, "edit_menu_item command");
    if let Some(name) = &patch.name {
        patch.name = Some(validate_display_name(name)?);
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }

    admin.with_store_mut(|s| {
        if !s.menu_mut().update(id, &patch) {
            return Err(ApiError::not_found("Menu item", id));
        }
        s.menu()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Menu item", id))
    })
}

pub fn remove_menu_item(admin: &AdminState, id: &str) -> Result<(), ApiError> {
    if admin.with_store_mut(|s| s.menu_mut().remove(id)) {
        info!(id = %id, "Menu item removed");
        Ok(())
    } else {
        Err(ApiError::not_found("Menu item", id))
    }
}

/// Shows or hides an item on the storefront. Returns the updated item.
pub fn toggle_menu_item(admin: &AdminState, id: &str) -> Result<AdminMenuItem, ApiError> {
    admin.with_store_mut(|s| {
        s.menu_mut()
            .toggle(id)
            .and_then(|_| s.menu().get(id).cloned())
            .ok_or_else(|| ApiError::not_found("Menu item", id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use grill_core::Money;

    fn new_item(name: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: "Pão brioche e cheddar".to_string(),
            price: Money::from_cents(3190),
            category: Category::Burgers,
            image: String::new(),
        }
    }

    #[test]
    fn test_storefront_filters() {
        let admin = AdminState::demo();

        let drinks = list_menu(&admin, &MenuFilter::new(Some(Category::Drinks), None));
        assert_eq!(drinks.len(), 4);
        assert!(drinks.iter().all(|i| i.category == Category::Drinks));

        // "bacon" matches Bacon Beast by name and Triple Point by description
        let bacon = list_menu(&admin, &MenuFilter::new(None, Some("  BACON ".to_string())));
        let names: Vec<&str> = bacon.iter().map(|i| i.name.as_str()).collect();
        assert!(names.contains(&"Bacon Beast"));
        assert!(names.contains(&"Triple Point"));
    }

    #[test]
    fn test_admin_search_matches_name_only() {
        let admin = AdminState::demo();
        let filter = MenuFilter::new(None, Some("bacon".to_string()));

        let found = list_admin_menu(&admin, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item.item.name, "Bacon Beast");
    }

    #[test]
    fn test_catalog_rows_carry_labels() {
        let admin = AdminState::demo();
        let rows = list_admin_menu(&admin, &MenuFilter::new(Some(Category::Sides), None));
        let fries = rows.iter().find(|r| r.item.id() == "batata-frita").unwrap();

        assert_eq!(fries.category_label, "Acompanhamento");
        assert_eq!(fries.price_input, "16.90");

        let json = serde_json::to_value(fries).unwrap();
        assert_eq!(json["id"], "batata-frita");
        assert_eq!(json["active"], true);
        assert_eq!(json["categoryLabel"], "Acompanhamento");
        assert_eq!(json["priceInput"], "16.90");
    }

    #[test]
    fn test_toggled_item_leaves_storefront_but_stays_in_admin() {
        let admin = AdminState::demo();

        let item = toggle_menu_item(&admin, "onion-rings").unwrap();
        assert!(!item.active);

        let everything = MenuFilter::default();
        assert!(list_menu(&admin, &everything).iter().all(|i| i.id != "onion-rings"));
        assert!(list_admin_menu(&admin, &everything).iter().any(|r| r.item.id() == "onion-rings"));
    }

    #[test]
    fn test_add_validates_name() {
        let admin = AdminState::demo();

        let err = add_menu_item(&admin, new_item("   ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let added = add_menu_item(&admin, new_item(" Cheddar Melt ")).unwrap();
        assert_eq!(added.item.name, "Cheddar Melt");
        assert!(added.active);
        assert!(added.id().starts_with("custom-"));
    }

    #[test]
    fn test_price_out_of_range_rejected() {
        let admin = AdminState::demo();
        let mut item = new_item("Ouro Burger");
        item.price = Money::from_cents(92_233_720_368_547_758);

        assert_eq!(add_menu_item(&admin, item).unwrap_err().code, ErrorCode::ValidationError);
        let err = edit_menu_item(&admin, "grill-classic", MenuItemPatch::new().price(Money::from_cents(-1)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_admin_menu(&admin, &MenuFilter::default()).len(), 13);
    }

    #[test]
    fn test_edit_and_remove_unknown() {
        let admin = AdminState::demo();

        let edited = edit_menu_item(&admin, "suco-detox", MenuItemPatch::new().price(Money::from_cents(1590)))
            .unwrap();
        assert_eq!(edited.item.price.cents(), 1590);

        let err = edit_menu_item(&admin, "nope", MenuItemPatch::new().name("x")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(remove_menu_item(&admin, "nope").unwrap_err().code, ErrorCode::NotFound);
        assert!(remove_menu_item(&admin, "suco-detox").is_ok());
    }
}
