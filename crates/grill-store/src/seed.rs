//! # Demo Seed Data
//!
//! The values every collection starts with, and returns to on
//! [`crate::AdminStore::reset_demo`].
//!
//! ## Contents
//! - 13 menu items across burgers, sides and drinks, all active
//! - Store settings for "Grill Point Burgers"
//! - 6 orders spread over the four statuses (`PED-001`..`PED-006`)
//! - 3 users (one admin, two employees)
//! - Dark theme
//! - A simulated week of sales for the dashboard chart

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use grill_core::{
    AdminMenuItem, AdminUser, Category, MenuItem, Money, Order, OrderItem, OrderStatus,
    SalesPoint, StoreSettings, Theme, UserRole,
};

/// All five collections at one point in time.
///
/// Used both as the reset target and as the JSON "backup" export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminSnapshot {
    pub menu: Vec<AdminMenuItem>,
    pub settings: StoreSettings,
    pub orders: Vec<Order>,
    pub users: Vec<AdminUser>,
    pub theme: Theme,
}

impl AdminSnapshot {
    /// The demo data set.
    pub fn demo() -> Self {
        AdminSnapshot {
            menu: menu().into_iter().map(AdminMenuItem::active).collect(),
            settings: store_settings(),
            orders: orders(),
            users: users(),
            theme: Theme::default(),
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// (id, name, description, price in centavos, category)
const MENU: &[(&str, &str, &str, i64, Category)] = &[
    ("grill-classic", "Grill Classic", "Blend 180g, queijo cheddar, alface, tomate e molho da casa", 2890, Category::Burgers),
    ("bacon-beast", "Bacon Beast", "Blend 180g, bacon crocante em dobro, cheddar e cebola caramelizada", 3590, Category::Burgers),
    ("double-smash", "Double Smash", "Dois smash de 90g, queijo prato e picles", 3290, Category::Burgers),
    ("triple-point", "Triple Point", "Três blends de 120g, três fatias de cheddar e bacon", 4290, Category::Burgers),
    ("picanha-burger", "Picanha Burger", "Blend de picanha 200g, queijo coalho e vinagrete", 3990, Category::Burgers),
    ("veggie-grill", "Veggie Grill", "Hambúrguer de grão-de-bico, rúcula e maionese de ervas", 2990, Category::Burgers),
    ("batata-frita", "Batata Frita Clássica", "Porção de batatas crocantes com sal e alecrim", 1690, Category::Sides),
    ("onion-rings", "Onion Rings", "Anéis de cebola empanados com molho barbecue", 1890, Category::Sides),
    ("mac-and-cheese", "Mac & Cheese", "Macarrão cremoso gratinado com três queijos", 2190, Category::Sides),
    ("coca-cola-350", "Coca-Cola 350ml", "Lata gelada", 790, Category::Drinks),
    ("cerveja-ipa-473", "Cerveja IPA 473ml", "IPA artesanal em lata", 1890, Category::Drinks),
    ("milkshake-ovomaltine", "Milkshake Ovomaltine", "Sorvete de baunilha batido com Ovomaltine", 1990, Category::Drinks),
    ("suco-detox", "Suco Detox", "Couve, limão, gengibre e maçã", 1490, Category::Drinks),
];

fn menu() -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(id, name, description, cents, category)| MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_cents(cents),
            category,
            image: format!("/images/{}.jpg", id),
        })
        .collect()
}

// =============================================================================
// Store Settings
// =============================================================================

fn store_settings() -> StoreSettings {
    StoreSettings {
        name: "Grill Point Burgers".to_string(),
        description: "Hamburgueria moderna especializada em hambúrgueres clássicos e saborosos com ingredientes selecionados.".to_string(),
        address: "Av. Paulista, 1000 - São Paulo, SP".to_string(),
        phone: "(11) 99999-9999".to_string(),
        instagram: "@grillpointburgers".to_string(),
        open_time: "11:00".to_string(),
        close_time: "23:00".to_string(),
        delivery_fee: Money::from_cents(690),
        estimated_delivery: "30-45 min".to_string(),
        is_open: true,
        logo: String::new(),
    }
}

// =============================================================================
// Orders
// =============================================================================

fn line(name: &str, quantity: i64, cents: i64) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        quantity,
        price: Money::from_cents(cents),
    }
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn order(
    id: &str,
    customer: &str,
    address: &str,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: NaiveDateTime,
) -> Order {
    let total = items.iter().map(OrderItem::line_total).sum();
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        address: address.to_string(),
        items,
        total,
        status,
        created_at,
    }
}

fn orders() -> Vec<Order> {
    vec![
        order(
            "PED-001",
            "Lucas Silva",
            "Rua Augusta, 200",
            vec![line("Grill Classic", 2, 2890), line("Batata Frita Clássica", 1, 1690)],
            OrderStatus::Received,
            at(12, 30),
        ),
        order(
            "PED-002",
            "Maria Oliveira",
            "Rua Oscar Freire, 450",
            vec![line("Bacon Beast", 1, 3590), line("Coca-Cola 350ml", 2, 790)],
            OrderStatus::Preparing,
            at(12, 45),
        ),
        order(
            "PED-003",
            "Pedro Santos",
            "Al. Santos, 1200",
            vec![
                line("Triple Point", 1, 4290),
                line("Onion Rings", 1, 1890),
                line("Cerveja IPA 473ml", 1, 1890),
            ],
            OrderStatus::Delivering,
            at(11, 15),
        ),
        order(
            "PED-004",
            "Ana Costa",
            "Rua Haddock Lobo, 80",
            vec![line("Double Smash", 3, 3290)],
            OrderStatus::Done,
            at(10, 0),
        ),
        order(
            "PED-005",
            "Carlos Mendes",
            "Rua Frei Caneca, 300",
            vec![
                line("Picanha Burger", 1, 3990),
                line("Mac & Cheese", 1, 2190),
                line("Milkshake Ovomaltine", 1, 1990),
            ],
            OrderStatus::Received,
            at(13, 0),
        ),
        order(
            "PED-006",
            "Fernanda Lima",
            "Rua Consolação, 600",
            vec![line("Veggie Grill", 2, 2990), line("Suco Detox", 2, 1490)],
            OrderStatus::Done,
            at(9, 30),
        ),
    ]
}

// =============================================================================
// Users
// =============================================================================

fn user(id: &str, name: &str, email: &str, role: UserRole, y: i32, m: u32, d: u32) -> AdminUser {
    AdminUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

fn users() -> Vec<AdminUser> {
    vec![
        user("u1", "João Admin", "joao@grillpoint.com", UserRole::Admin, 2025, 1, 15),
        user("u2", "Maria Caixa", "maria@grillpoint.com", UserRole::Employee, 2025, 6, 20),
        user("u3", "Pedro Cozinha", "pedro@grillpoint.com", UserRole::Employee, 2025, 9, 10),
    ]
}

// =============================================================================
// Dashboard Chart
// =============================================================================

/// Simulated sales per weekday, Monday first.
pub fn weekly_sales() -> Vec<SalesPoint> {
    [
        ("Seg", 1250),
        ("Ter", 980),
        ("Qua", 1480),
        ("Qui", 1120),
        ("Sex", 2100),
        ("Sáb", 2650),
        ("Dom", 1800),
    ]
    .into_iter()
    .map(|(day, reais)| SalesPoint {
        day: day.to_string(),
        sales: Money::from_reais(reais, 0),
    })
    .collect()
}
