//! # Domain Types
//!
//! Core domain types shared by the storefront and the admin panel.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Order       │   │  StoreSettings  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (PED-001)   │   │  name, phone    │       │
//! │  │  name, price    │   │  customer       │   │  open/close     │       │
//! │  │  category       │   │  items[]        │   │  delivery fee   │       │
//! │  │  (+ active in   │   │  total snapshot │   │  is_open        │       │
//! │  │   AdminMenuItem)│   │  status         │   │  (singleton)    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   AdminUser     │   │     Theme       │       │
//! │  │  Burgers        │   │  id, email      │   │  Dark (default) │       │
//! │  │  Sides          │   │  role           │   │  Light          │       │
//! │  │  Drinks         │   │  created_at     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::status::OrderStatus;

// =============================================================================
// Category
// =============================================================================

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Burgers,
    Sides,
    Drinks,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 3] = [Category::Burgers, Category::Sides, Category::Drinks];

    /// Wire name (`burgers`, `sides`, `drinks`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Burgers => "burgers",
            Category::Sides => "sides",
            Category::Drinks => "drinks",
        }
    }

    /// Label shown in the admin menu table.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Burgers => "Hambúrguer",
            Category::Sides => "Acompanhamento",
            Category::Drinks => "Bebida",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Menu Items
// =============================================================================

/// A catalog record as the storefront sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    /// Image path or URL, rendered by the front end as-is.
    pub image: String,
}

/// A catalog record with its admin-only visibility flag.
///
/// Inactive items stay in the catalog but are hidden from the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub active: bool,
}

impl AdminMenuItem {
    /// Wraps a catalog record as active.
    pub fn active(item: MenuItem) -> Self {
        AdminMenuItem { item, active: true }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

/// Input for adding a menu item: everything except the id and the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    pub image: String,
}

impl NewMenuItem {
    /// Attaches an id, producing the catalog record.
    pub fn with_id(self, id: String) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// A line of a submitted order. Name and price are frozen copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

impl OrderItem {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A submitted order.
///
/// Everything but `status` is immutable once created. `total` is a snapshot
/// taken when the order was placed and is not recomputed from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable id (`PED-001`).
    pub id: String,
    pub customer: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: Money,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: NaiveDateTime,
}

impl Order {
    /// Number of distinct lines (shown as "N item(ns)" in the orders list).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_pending(&self) -> bool {
        !self.status.is_terminal()
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// The single configuration record describing the restaurant.
///
/// No field is validated here: opening hours are free text (`"11:00"`),
/// the phone is display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub instagram: String,
    pub open_time: String,
    pub close_time: String,
    pub delivery_fee: Money,
    pub estimated_delivery: String,
    pub is_open: bool,
    /// Logo path or URL, empty when none is set.
    pub logo: String,
}

// =============================================================================
// Users
// =============================================================================

/// Back-office role. Not enforced anywhere; shown in the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::Employee];

    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Employee => "employee",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Employee => "Funcionário",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Employee
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: UserRole::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

/// A back-office user. There is no password: authentication is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Calendar date only (`2025-01-15`).
    #[ts(as = "String")]
    pub created_at: NaiveDate,
}

/// Input for adding a user: everything except the id and creation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn into_user(self, id: String, created_at: NaiveDate) -> AdminUser {
        AdminUser {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Admin panel color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub const fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ValidationError::NotAllowed {
                field: "theme".to_string(),
                allowed: vec!["dark".to_string(), "light".to_string()],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: "onion-rings".to_string(),
            name: "Onion Rings".to_string(),
            description: "Anéis de cebola empanados".to_string(),
            price: Money::from_cents(1890),
            category: Category::Sides,
            image: "/images/onion-rings.jpg".to_string(),
        }
    }

    #[test]
    fn test_category_parse_and_labels() {
        assert_eq!("drinks".parse::<Category>().unwrap(), Category::Drinks);
        assert_eq!(" Burgers ".parse::<Category>().unwrap(), Category::Burgers);
        assert!("desserts".parse::<Category>().is_err());
        assert_eq!(Category::Sides.label(), "Acompanhamento");
    }

    #[test]
    fn test_admin_menu_item_flattens_on_the_wire() {
        let item = AdminMenuItem::active(sample_item());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "onion-rings");
        assert_eq!(json["category"], "sides");
        assert_eq!(json["price"], 1890);
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_order_item_line_total() {
        let line = OrderItem {
            name: "Double Smash".to_string(),
            quantity: 3,
            price: Money::from_cents(3290),
        };
        assert_eq!(line.line_total().cents(), 9870);
    }

    #[test]
    fn test_order_created_at_wire_format() {
        let json = r#"{
            "id": "PED-001",
            "customer": "Lucas Silva",
            "address": "Rua Augusta, 200",
            "items": [],
            "total": 7470,
            "status": "received",
            "createdAt": "2026-03-01T12:30:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Received);
        assert_eq!(order.created_at.to_string(), "2026-03-01 12:30:00");
        assert!(order.is_pending());
    }

    #[test]
    fn test_user_role_parse() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("owner".parse::<UserRole>().is_err());
        assert_eq!(UserRole::default(), UserRole::Employee);
    }

    #[test]
    fn test_theme_default_and_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
    }
}
