//! # Partial Updates
//!
//! Typed field-level updates for records edited in the admin panel.
//!
//! Each patch holds an `Option` per editable field. `None` leaves the field
//! alone; `Some(v)` overwrites it. Ids are not part of any patch, so an update
//! can never break id uniqueness.
//!
//! ```rust
//! use grill_core::{MenuItemPatch, Money};
//!
//! let patch = MenuItemPatch::new()
//!     .name("Grill Classic Duplo")
//!     .price(Money::from_cents(3490));
//! assert!(!patch.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AdminMenuItem, AdminUser, Category, StoreSettings, UserRole};

// =============================================================================
// Menu Item Patch
// =============================================================================

/// Changes to a catalog record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub category: Option<Category>,
    pub image: Option<String>,
    pub active: Option<bool>,
}

impl MenuItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the set fields into `target`.
    pub fn apply_to(&self, target: &mut AdminMenuItem) {
        let item = &mut target.item;
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(image) = &self.image {
            item.image = image.clone();
        }
        if let Some(active) = self.active {
            target.active = active;
        }
    }
}

// =============================================================================
// Store Settings Patch
// =============================================================================

/// Changes to the store settings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub delivery_fee: Option<Money>,
    pub estimated_delivery: Option<String>,
    pub is_open: Option<bool>,
    pub logo: Option<String>,
}

impl StorePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn instagram(mut self, instagram: impl Into<String>) -> Self {
        self.instagram = Some(instagram.into());
        self
    }

    pub fn hours(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_time = Some(open.into());
        self.close_time = Some(close.into());
        self
    }

    pub fn delivery_fee(mut self, fee: Money) -> Self {
        self.delivery_fee = Some(fee);
        self
    }

    pub fn estimated_delivery(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_delivery = Some(estimate.into());
        self
    }

    pub fn is_open(mut self, open: bool) -> Self {
        self.is_open = Some(open);
        self
    }

    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the set fields into `target`. Values are taken as given.
    pub fn apply_to(&self, target: &mut StoreSettings) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut target.name, &self.name);
        set(&mut target.description, &self.description);
        set(&mut target.address, &self.address);
        set(&mut target.phone, &self.phone);
        set(&mut target.instagram, &self.instagram);
        set(&mut target.open_time, &self.open_time);
        set(&mut target.close_time, &self.close_time);
        set(&mut target.delivery_fee, &self.delivery_fee);
        set(&mut target.estimated_delivery, &self.estimated_delivery);
        set(&mut target.is_open, &self.is_open);
        set(&mut target.logo, &self.logo);
    }
}

// =============================================================================
// User Patch
// =============================================================================

/// Changes to a back-office user. The creation date is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(&self, target: &mut AdminUser) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(email) = &self.email {
            target.email = email.clone();
        }
        if let Some(role) = self.role {
            target.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;
    use chrono::NaiveDate;

    fn fries() -> AdminMenuItem {
        AdminMenuItem::active(MenuItem {
            id: "batata-frita".to_string(),
            name: "Batata Frita Clássica".to_string(),
            description: "Porção crocante".to_string(),
            price: Money::from_cents(1690),
            category: Category::Sides,
            image: String::new(),
        })
    }

    #[test]
    fn test_menu_patch_merges_only_set_fields() {
        let mut item = fries();
        MenuItemPatch::new()
            .price(Money::from_cents(1790))
            .active(false)
            .apply_to(&mut item);

        assert_eq!(item.item.price.cents(), 1790);
        assert!(!item.active);
        assert_eq!(item.item.name, "Batata Frita Clássica");
        assert_eq!(item.id(), "batata-frita");
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut item = fries();
        let before = item.clone();
        let patch = MenuItemPatch::new();

        assert!(patch.is_empty());
        patch.apply_to(&mut item);
        assert_eq!(item, before);
    }

    #[test]
    fn test_store_patch_accepts_values_unchecked() {
        let mut settings = StoreSettings {
            name: "Grill Point Burgers".to_string(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            instagram: String::new(),
            open_time: "11:00".to_string(),
            close_time: "23:00".to_string(),
            delivery_fee: Money::from_cents(690),
            estimated_delivery: "30-45 min".to_string(),
            is_open: true,
            logo: String::new(),
        };

        // closing before opening and a negative fee are the view's problem
        StorePatch::new()
            .hours("23:00", "11:00")
            .delivery_fee(Money::from_cents(-100))
            .is_open(false)
            .apply_to(&mut settings);

        assert_eq!(settings.open_time, "23:00");
        assert_eq!(settings.close_time, "11:00");
        assert_eq!(settings.delivery_fee.cents(), -100);
        assert!(!settings.is_open);
        assert_eq!(settings.name, "Grill Point Burgers");
    }

    #[test]
    fn test_user_patch() {
        let mut user = AdminUser {
            id: "u2".to_string(),
            name: "Maria Caixa".to_string(),
            email: "maria@grillpoint.com".to_string(),
            role: UserRole::Employee,
            created_at: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        };

        UserPatch::new().role(UserRole::Admin).apply_to(&mut user);

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.email, "maria@grillpoint.com");
    }

    #[test]
    fn test_store_patch_wire_names() {
        let patch: StorePatch =
            serde_json::from_str(r#"{"deliveryFee": 790, "isOpen": false}"#).unwrap();
        assert_eq!(patch.delivery_fee, Some(Money::from_cents(790)));
        assert_eq!(patch.is_open, Some(false));
        assert!(patch.name.is_none());
    }
}
