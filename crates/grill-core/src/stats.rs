//! Dashboard numbers computed from the menu and order collections.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AdminMenuItem, Order};

/// The four stat cards at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Menu items visible on the storefront.
    pub active_items: usize,
    pub order_count: usize,
    /// Sum of order totals.
    pub revenue: Money,
    /// Orders not yet `done`.
    pub pending_orders: usize,
}

impl DashboardStats {
    pub fn compute(menu: &[AdminMenuItem], orders: &[Order]) -> Self {
        DashboardStats {
            active_items: menu.iter().filter(|i| i.active).count(),
            order_count: orders.len(),
            revenue: orders.iter().map(|o| o.total).sum(),
            pending_orders: orders.iter().filter(|o| o.is_pending()).count(),
        }
    }
}

/// The first `limit` orders, in collection order.
pub fn recent_orders(orders: &[Order], limit: usize) -> &[Order] {
    &orders[..orders.len().min(limit)]
}

/// One bar of the weekly sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesPoint {
    /// Abbreviated weekday (`Seg`, `Ter`, ...).
    pub day: String,
    pub sales: Money,
}
